//! Enumerated option sets
//!
//! Every theme option that the layout engine accepts as a string literal is
//! modelled as a closed enum. The wire names match what the frontend
//! expects (`"boxed"`, `"sticky"`, `"fade-transition"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// Declares a closed option set with its wire names.
///
/// Generates serde renames, `as_str`, `ALL`, `Display` and a `FromStr`
/// that rejects unknown names with [`ConfigurationError::InvalidValue`].
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every declared value, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Wire name of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConfigurationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(ConfigurationError::invalid($label, other)),
                }
            }
        }
    };
}

option_set! {
    /// Width of the main content area
    ContentWidth, "contentWidth" {
        Boxed => "boxed",
        Fluid => "fluid",
    }
}

option_set! {
    /// Which navigation layout wraps the content
    AppContentLayoutNav, "contentLayoutNav" {
        Vertical => "vertical",
        Horizontal => "horizontal",
    }
}

option_set! {
    /// Color theme
    ThemeMode, "theme" {
        Light => "light",
        Dark => "dark",
        /// Follow the operating system preference
        System => "system",
    }
}

option_set! {
    /// Visual variant of the whole theme
    Skin, "skin" {
        Default => "default",
        Bordered => "bordered",
    }
}

option_set! {
    /// Named Vuetify transition
    ///
    /// Used both for route changes and for horizontal-nav popups.
    Transition, "transition" {
        Fade => "fade-transition",
        Scale => "scale-transition",
        ScrollX => "scroll-x-transition",
        ScrollXReverse => "scroll-x-reverse-transition",
        ScrollY => "scroll-y-transition",
        ScrollYReverse => "scroll-y-reverse-transition",
        SlideX => "slide-x-transition",
        SlideXReverse => "slide-x-reverse-transition",
        SlideY => "slide-y-transition",
        SlideYReverse => "slide-y-reverse-transition",
        None => "none",
    }
}

option_set! {
    NavbarType, "navbar.type" {
        Sticky => "sticky",
        Static => "static",
        Hidden => "hidden",
    }
}

option_set! {
    FooterType, "footer.type" {
        Sticky => "sticky",
        Static => "static",
        Hidden => "hidden",
    }
}

option_set! {
    HorizontalNavType, "horizontalNav.type" {
        Sticky => "sticky",
        Static => "static",
        Hidden => "hidden",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip_through_from_str() {
        for t in Transition::ALL {
            assert_eq!(t.as_str().parse::<Transition>().unwrap(), *t);
        }
        for n in NavbarType::ALL {
            assert_eq!(n.to_string().parse::<NavbarType>().unwrap(), *n);
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = "floating".parse::<NavbarType>().unwrap_err();
        assert_eq!(err, ConfigurationError::invalid("navbar.type", "floating"));

        assert!("Boxed".parse::<ContentWidth>().is_err());
        assert!("fade".parse::<Transition>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&Transition::SlideYReverse).unwrap(),
            r#""slide-y-reverse-transition""#
        );
        let skin: Skin = serde_json::from_str(r#""bordered""#).unwrap();
        assert_eq!(skin, Skin::Bordered);
        assert!(serde_json::from_str::<FooterType>(r#""floating""#).is_err());
    }

    #[test]
    fn test_all_lists_every_value() {
        assert_eq!(ContentWidth::ALL.len(), 2);
        assert_eq!(ThemeMode::ALL.len(), 3);
        assert_eq!(Transition::ALL.len(), 11);
        assert_eq!(FooterType::ALL, &[FooterType::Sticky, FooterType::Static, FooterType::Hidden]);
    }
}
