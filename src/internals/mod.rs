mod framing;
pub use self::framing::*;

mod source_chain;
pub use self::source_chain::*;
