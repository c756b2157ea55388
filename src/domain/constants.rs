pub const HELLO: &str = "Hello";
pub const GREETING_QUESTION: &str = "What's up?";
pub const FIRST_PAIR: (&str, &str) = ("text1", "text2");
pub const SECOND_PAIR: (&str, &str) = ("print", "again");
