//! `define_port_error!` generates `thiserror` enums for driven ports along
//! with snake_case constructors that accept `impl Into<_>` field values.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SeatPortError {
            Unavailable { message: String } => "unavailable: {message}",
            Full { capacity: u32 } => "full at {capacity}",
            Taken { holder: String, seat: u32 } => "seat {seat} held by {holder}",
            Closed => "closed",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(
            SeatPortError::unavailable("pool exhausted").to_string(),
            "unavailable: pool exhausted"
        );
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(SeatPortError::full(4_u32).to_string(), "full at 4");
    }

    #[test]
    fn mixed_fields_follow_declaration_order() {
        let err = SeatPortError::taken("ada@example.com", 2_u32);
        assert_eq!(err.to_string(), "seat 2 held by ada@example.com");
    }

    #[test]
    fn unit_variants_get_snake_case_constructors() {
        assert_eq!(SeatPortError::closed(), SeatPortError::Closed);
    }
}
