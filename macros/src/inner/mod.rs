//! Internal generators: invoked from inside `tola-packs` itself.

pub mod peano;
pub mod stream;
pub mod value;
