pub mod coverage;
pub mod init;
pub mod normalize;
pub mod prompt;
pub mod score;
pub mod validate;
