/// Declares an integer id newtype for entities whose ids are assigned by the
/// remote store.
///
/// Generates:
/// - a newtype over `i64`
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
///   with `#[serde(transparent)]`
/// - `new()` / `as_i64()`
/// - `FromStr`, so ids can come straight from route segments
///
/// ```rust
/// use newsroom_domain::post::PostId;
///
/// let id: PostId = "7".parse().unwrap();
/// assert_eq!(id, PostId::new(7));
/// assert_eq!(id.to_string(), "7");
/// ```
macro_rules! define_numeric_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(i64);

        impl $Name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::str::FromStr for $Name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self).map_err(|_| {
                    $crate::DomainError::Validation(format!(
                        "invalid {}: {:?}",
                        stringify!($Name),
                        s
                    ))
                })
            }
        }
    };
}
