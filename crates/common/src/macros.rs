#[macro_export]
macro_rules! pub_fields_struct {
    {
        $(
            $(#[$($attr:tt)*])*
            struct $name:ident $(<$($generics:tt),+>)? {
                $($field:ident: $t:ty,)*
            }
        )*
    } => {
        $(
            $(#[$($attr)*])*
            pub struct $name $(<$($generics),+>)? {
                $(pub $field: $t),*
            }
        )*
    }
}
