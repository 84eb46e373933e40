#[cfg(test)]
mod test;

pub mod constants;
pub mod parameters;
pub mod utils;
