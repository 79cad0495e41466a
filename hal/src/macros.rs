#![macro_use]

macro_rules! typestate {
    ($name:ident, $doc:expr) => {
        paste::paste! {
            #[doc = "[Typestate] for the " $doc " MCG mode."]
            ///
            /// [Typestate]: https://docs.rust-embedded.org/book/static-guarantees/typestate-programming.html
            #[derive(Debug, PartialEq, Eq, Clone, Copy)]
            #[cfg_attr(feature = "defmt", derive(defmt::Format))]
            pub struct $name {
                _priv: (),
            }
        }

        impl $name {
            pub(crate) const fn new() -> Self {
                Self { _priv: () }
            }
        }
    };
}
