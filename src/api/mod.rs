pub mod navigation;
pub mod signup;
