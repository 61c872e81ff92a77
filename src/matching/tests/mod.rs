mod common;
mod profile;
mod weights;
