//! Batch validation.
//!
//! Validating a slice of inputs with one validator does not stop at the
//! first bad input: every failure is collected into [`ValidationErrors`],
//! each one's path prefixed with the input's index.

use rayon::prelude::*;
use stillwater::Validation;

use crate::error::{ValidationError, ValidationErrors};
use crate::path::ValuePath;
use crate::validator::Validator;
use crate::value::Value;
use crate::ValidationResult;

fn accumulate<T>(results: Vec<Result<T, ValidationError>>) -> ValidationResult<Vec<T>> {
    let mut outputs = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(output) => outputs.push(output),
            Err(error) => errors.push(error),
        }
    }
    match ValidationErrors::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(outputs),
    }
}

impl<T: 'static> Validator<T> {
    /// Validates every input, accumulating all failures.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    /// use serde_json::json;
    ///
    /// let inputs: Vec<Value> = vec![json!(1).into(), json!("two").into(), json!(null).into()];
    /// let errors = Schema::number().check_all(&inputs).into_result().unwrap_err();
    ///
    /// assert_eq!(errors.len(), 2);
    /// assert_eq!(errors.first().path.to_string(), "[1]");
    /// ```
    pub fn check_all(&self, inputs: &[Value]) -> ValidationResult<Vec<T>> {
        accumulate(
            inputs
                .iter()
                .enumerate()
                .map(|(i, input)| self.check_at(input, &ValuePath::root().push_index(i)))
                .collect(),
        )
    }

    /// Like [`check_all`](Self::check_all), spread across the rayon pool.
    /// Outputs and failures keep input order.
    pub fn par_check_all(&self, inputs: &[Value]) -> ValidationResult<Vec<T>>
    where
        T: Send,
    {
        accumulate(
            inputs
                .par_iter()
                .enumerate()
                .map(|(i, input)| self.check_at(input, &ValuePath::root().push_index(i)))
                .collect(),
        )
    }
}
