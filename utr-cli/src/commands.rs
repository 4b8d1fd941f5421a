mod extract;

pub use self::extract::extract;
