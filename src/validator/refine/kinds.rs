//! Type-negation refinements.

use crate::error::ValidationError;
use crate::value::{Kind, ToValue};

use crate::validator::Validator;

macro_rules! kind_negations {
    ($($method:ident => $kind:ident, $noun:literal;)+) => {
        impl<T: ToValue + 'static> Validator<T> {
            $(
                #[doc = concat!("Rejects an output whose kind is `", stringify!($kind), "`.")]
                #[track_caller]
                pub fn $method(&self) -> Validator<T> {
                    self.refine(|value, path| {
                        if value.kind() == Kind::$kind {
                            Err(ValidationError::new(
                                path.clone(),
                                concat!("Value must not be ", $noun),
                            )
                            .with_code(stringify!($method))
                            .with_got(Kind::$kind.name()))
                        } else {
                            Ok(())
                        }
                    })
                }
            )+
        }
    };
}

kind_negations! {
    not_string => String, "a string";
    not_number => Number, "a number";
    not_boolean => Boolean, "a boolean";
    not_null => Null, "null";
    not_undefined => Undefined, "undefined";
    not_func => Function, "a function";
    not_set => Set, "a set";
    not_map => Map, "a map";
    not_array => Array, "an array";
}
