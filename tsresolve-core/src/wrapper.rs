//! Wrapping rules for computed types.
//!
//! Resolver-facing types are wrapped in `ResolverTypeWrapper<T>` so that a
//! resolver may return the value directly or asynchronously. Field result
//! types additionally carry their list and nullability wrappers.

/// Generic wrapper applied to resolver-facing table entries.
pub const RESOLVER_TYPE_WRAPPER: &str = "ResolverTypeWrapper";

/// Nullable wrapper used for output positions.
pub const MAYBE: &str = "Maybe";

/// Nullable wrapper used for argument and input field positions.
pub const INPUT_MAYBE: &str = "InputMaybe";

/// One layer of a GraphQL type reference, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperLayer {
    /// The value at this level may be null.
    Nullable,
    /// The value at this level is a list.
    List,
}

/// Applies list and nullability layers around an inner type.
///
/// `layers` is ordered outermost first, so `[Post]` (a nullable list of
/// nullable posts) is `[Nullable, List, Nullable]` and renders as
/// `Maybe<Array<Maybe<Post>>>`.
#[must_use]
pub fn wrap_layers(inner: &str, layers: &[WrapperLayer], nullable_wrapper: &str) -> String {
    layers
        .iter()
        .rev()
        .fold(inner.to_string(), |acc, layer| match layer {
            WrapperLayer::Nullable => format!("{nullable_wrapper}<{acc}>"),
            WrapperLayer::List => format!("Array<{acc}>"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_layers_non_null() {
        assert_eq!(wrap_layers("User", &[], MAYBE), "User");
    }

    #[test]
    fn test_wrap_layers_nullable() {
        assert_eq!(
            wrap_layers("User", &[WrapperLayer::Nullable], MAYBE),
            "Maybe<User>"
        );
    }

    #[test]
    fn test_wrap_layers_non_null_list_of_non_null() {
        assert_eq!(
            wrap_layers("Post", &[WrapperLayer::List], MAYBE),
            "Array<Post>"
        );
    }

    #[test]
    fn test_wrap_layers_nullable_list_of_nullable() {
        let layers = [
            WrapperLayer::Nullable,
            WrapperLayer::List,
            WrapperLayer::Nullable,
        ];
        assert_eq!(
            wrap_layers("Post", &layers, MAYBE),
            "Maybe<Array<Maybe<Post>>>"
        );
        assert_eq!(
            wrap_layers("Post", &layers, INPUT_MAYBE),
            "InputMaybe<Array<InputMaybe<Post>>>"
        );
    }
}
