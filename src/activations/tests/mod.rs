mod identity;
mod relu;
