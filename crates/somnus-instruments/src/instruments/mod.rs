pub mod psqi;
