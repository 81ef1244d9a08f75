use mite::{check, check_eq, test_case};

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

test_case! {
    fn arith_add() {
        check_eq!(2 + 3, 5);
        check_eq!(i32::MAX.checked_add(1), None);
    }
}

test_case! {
    fn arith_mul() {
        check_eq!(7 * 6, 42);
        check!(3_u8.checked_mul(100).is_none(), "u8 multiplication should overflow");
    }
}

test_case! {
    fn arith_gcd() {
        check_eq!(gcd(48, 18), 6);
        check_eq!(gcd(17, 5), 1);
        check_eq!(gcd(0, 9), 9);
    }
}
