// src/shapes/mod.rs

//! The nine operation shapes.
//!
//! Every shape is a trait with:
//! - one required *fallible* method returning `Result<_, E>`;
//! - one provided *trusted* method with the plain signature, which routes a
//!   failure through [`crate::invoke::invoke_with`];
//! - a blanket impl for closures of the same arity;
//! - an impl for [`CastDown`](crate::narrow::CastDown) views over the same
//!   shape.
//!
//! All of it comes out of [`operation_shape!`] so the rule is written once.
//!
//! - [`action`]: [`Runnable`], [`Consumer`], [`BiConsumer`]
//! - [`producer`]: [`Supplier`], [`Function`], [`BiFunction`]
//! - [`predicate`]: [`Condition`], [`Predicate`], [`BiPredicate`]

/// Generate a shape trait and its impls.
///
/// Each argument is written `name: Target => Source`: the target type a call
/// site supplies and the source type a narrowed operation accepts. A result
/// written `-> R <= R0` is a generic result the source produces as `R0`; a
/// result written `-> ty` is fixed.
macro_rules! operation_shape {
    (
        $(#[$attr:meta])*
        $shape:ident ( $($arg:ident : $in:ident => $src_in:ident),* ) -> $out:ident <= $src_out:ident ;
        $checked:ident / $trusted:ident
    ) => {
        $(#[$attr])*
        pub trait $shape<$($in,)* $out, E: $crate::Failure> {
            #[doc = concat!("Fallible method; the shape's real logic. See also [`", stringify!($shape), "::", stringify!($trusted), "`].")]
            fn $checked(&self $(, $arg: $in)*) -> ::std::result::Result<$out, E>;

            #[doc = concat!("Call [`", stringify!($shape), "::", stringify!($checked), "`]; a failure is passed through [`wrap_failure`](crate::wrap_failure) and raised.")]
            fn $trusted(&self $(, $arg: $in)*) -> $out {
                $crate::invoke::invoke_with(|| self.$checked($($arg),*))
            }
        }

        impl<Func, $($in,)* $out, E> $shape<$($in,)* $out, E> for Func
        where
            Func: Fn($($in),*) -> ::std::result::Result<$out, E>,
            E: $crate::Failure,
        {
            fn $checked(&self $(, $arg: $in)*) -> ::std::result::Result<$out, E> {
                self($($arg),*)
            }
        }

        impl<'a, Op, $($in, $src_in,)* $out, $src_out, E, Src> $shape<$($in,)* $out, E>
            for $crate::narrow::CastDown<'a, Op, ($($src_in,)* $src_out, Src)>
        where
            Op: $shape<$($src_in,)* $src_out, Src> + ?Sized,
            $($in: Into<$src_in>,)*
            $src_out: Into<$out>,
            E: $crate::Failure,
            Src: $crate::Failure + Into<E>,
        {
            fn $checked(&self $(, $arg: $in)*) -> ::std::result::Result<$out, E> {
                self.get_ref()
                    .$checked($($arg.into()),*)
                    .map(Into::into)
                    .map_err(Into::into)
            }

            fn $trusted(&self $(, $arg: $in)*) -> $out {
                self.get_ref().$trusted($($arg.into()),*).into()
            }
        }
    };
    (
        $(#[$attr:meta])*
        $shape:ident ( $($arg:ident : $in:ident => $src_in:ident),* ) -> $fixed:ty ;
        $checked:ident / $trusted:ident
    ) => {
        $(#[$attr])*
        pub trait $shape<$($in,)* E: $crate::Failure> {
            #[doc = concat!("Fallible method; the shape's real logic. See also [`", stringify!($shape), "::", stringify!($trusted), "`].")]
            fn $checked(&self $(, $arg: $in)*) -> ::std::result::Result<$fixed, E>;

            #[doc = concat!("Call [`", stringify!($shape), "::", stringify!($checked), "`]; a failure is passed through [`wrap_failure`](crate::wrap_failure) and raised.")]
            fn $trusted(&self $(, $arg: $in)*) -> $fixed {
                $crate::invoke::invoke_with(|| self.$checked($($arg),*))
            }
        }

        impl<Func, $($in,)* E> $shape<$($in,)* E> for Func
        where
            Func: Fn($($in),*) -> ::std::result::Result<$fixed, E>,
            E: $crate::Failure,
        {
            fn $checked(&self $(, $arg: $in)*) -> ::std::result::Result<$fixed, E> {
                self($($arg),*)
            }
        }

        impl<'a, Op, $($in, $src_in,)* E, Src> $shape<$($in,)* E>
            for $crate::narrow::CastDown<'a, Op, ($($src_in,)* Src,)>
        where
            Op: $shape<$($src_in,)* Src> + ?Sized,
            $($in: Into<$src_in>,)*
            E: $crate::Failure,
            Src: $crate::Failure + Into<E>,
        {
            fn $checked(&self $(, $arg: $in)*) -> ::std::result::Result<$fixed, E> {
                self.get_ref().$checked($($arg.into()),*).map_err(Into::into)
            }

            fn $trusted(&self $(, $arg: $in)*) -> $fixed {
                self.get_ref().$trusted($($arg.into()),*)
            }
        }
    };
}

pub mod action;
pub mod predicate;
pub mod producer;

pub use action::{BiConsumer, Consumer, Runnable};
pub use predicate::{BiPredicate, Condition, Predicate};
pub use producer::{BiFunction, Function, Supplier};
