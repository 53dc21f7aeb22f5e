pub mod canvas;
pub mod shapes;
