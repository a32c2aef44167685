pub mod compare;
pub mod value;

pub use compare::{Compare, Equal, Greater, GreaterOrEqual, Less, LessOrEqual, NotEqual};
pub use value::{MinusOne, Null, SentinelConst, SentinelResult, Zero};
