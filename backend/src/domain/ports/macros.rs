//! `define_port_error!` builds the error enums returned by outbound ports.
//!
//! Each variant carries named fields and a display template. The macro derives
//! `thiserror::Error` and emits one snake_case constructor per variant whose
//! parameters accept anything convertible into the field type.

macro_rules! define_port_error {
    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*)) => {
        ::paste::paste! {
            #[doc = concat!("Build a [`Self::", stringify!($variant), "`] error.")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        /// Store failures used only to exercise the macro.
        pub enum CatalogueStoreError {
            Offline { message: String } => "catalogue store offline: {message}",
            Throttled { retry_after_secs: u32 } => "catalogue store throttled for {retry_after_secs}s",
            Rejected { message: String, status: u16 } => "catalogue store rejected ({status}): {message}",
        }
    }

    #[rstest]
    fn string_fields_accept_borrowed_text() {
        let err = CatalogueStoreError::offline("socket closed");
        assert_eq!(err.to_string(), "catalogue store offline: socket closed");
        assert_eq!(
            err,
            CatalogueStoreError::Offline {
                message: "socket closed".to_owned()
            }
        );
    }

    #[rstest]
    fn numeric_fields_keep_their_type() {
        let err = CatalogueStoreError::throttled(30_u32);
        assert_eq!(err.to_string(), "catalogue store throttled for 30s");
    }

    #[rstest]
    fn constructor_parameters_follow_field_order() {
        let err = CatalogueStoreError::rejected("duplicate name", 409_u16);
        assert_eq!(err.to_string(), "catalogue store rejected (409): duplicate name");
    }
}
