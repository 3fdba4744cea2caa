use crate::Float;


pub mod error;
pub mod estimators;
pub mod hyperparams;
pub mod model;
pub mod param_guard;
pub mod traits;
