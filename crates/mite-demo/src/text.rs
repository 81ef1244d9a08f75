use mite::{check, check_eq, check_ne, test_case};

test_case! {
    fn text_concat() {
        let joined = ["mi", "te"].concat();
        check_eq!(joined, "mite");
    }
}

test_case! {
    fn text_upper() {
        check_eq!("mite".to_uppercase(), "MITE");
        check_ne!("Mite", "mite");
    }
}

test_case! {
    fn text_split() {
        let parts: Vec<&str> = "a,b,,c".split(',').collect();
        check!(parts.len() == 4, "got {} parts", parts.len());
        check!(parts[2].is_empty());
    }
}
