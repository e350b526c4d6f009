pub mod obstacle;
pub mod pointer;
pub mod springs;
