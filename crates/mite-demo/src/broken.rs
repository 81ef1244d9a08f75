use mite::{check, check_eq, test_case};

test_case! {
    fn broken_check() {
        let items = [1, 2, 3];
        check!(items.iter().sum::<i32>() == 7, "sum was {}", items.iter().sum::<i32>());
    }
}

test_case! {
    fn broken_panic() {
        let empty: Vec<u8> = Vec::new();
        check_eq!(empty.first().copied().unwrap_or_else(|| panic!("no first byte")), 0);
    }
}
