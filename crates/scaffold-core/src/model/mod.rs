pub mod entity;
pub mod field;
pub mod path;

#[cfg(test)]
mod tests;
