//! Just a module with a few utilities that make writing code easier through out trilayer

#[cfg(test)]
pub(crate) mod approx_eq;
pub(crate) mod matrix_operations;

pub(crate) use matrix_operations::MatrixOperations;
