pub mod resx;
