//! This module contains analytical solutions used as stand-in engines for testing and verifications

mod stefan_melting;
pub use crate::analytical::stefan_melting::*;
