//! Ingredient density lookup for weight/volume conversion.
//!
//! This crate provides density data (grams per US cup) for common cooking
//! ingredients, enabling conversion between volume and weight measurements.
//!
//! Data sources:
//! - A base table of common pantry ingredients
//! - Curated overrides with citations for specific ingredients
//!
//! # Example
//!
//! ```
//! use ingredient_density::{find_density, ML_PER_CUP};
//!
//! // Look up density for flour
//! if let Some(grams_per_cup) = find_density("all-purpose flour") {
//!     // Convert 500 ml to grams
//!     let grams = 500.0 / ML_PER_CUP * grams_per_cup;
//!     println!("500 ml flour = {grams}g");
//! }
//! ```

mod density_lookup;

pub use density_lookup::{find_density, ML_PER_CUP};
