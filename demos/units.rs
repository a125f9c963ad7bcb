//! Pack algorithms on a small unit system.
//!
//! Everything below is decided while type checking; `main` only prints
//! what the compiler already computed.

use tola_packs::facade::mouldivore::{Injected, Reversed, Sliced, Trek};
use tola_packs::facade::omennivore::EasyKindredRepack;
use tola_packs::facade::typelivore::{AreDistinct, Find, Gauge, Rotate};
use tola_packs::facade::varybivore::CognateModify;
use tola_packs::prelude::*;

#[derive(Element)]
struct Meter;

#[derive(Element)]
struct Second;

#[derive(Element)]
struct Kilogram;

type Base = pack![Meter, Kilogram, Second];

// Type-level selection
//
// Rotate the base units, cut a window and splice a marker in.

type Steps = pack![Sliced<0, 2>, Injected<1, pack![u8]>, Reversed];
type Shaped = Trek<Steps, Rotate<Base, 1>>;

tola_packs::assert_same!(Shaped, pack![Second, u8, Kilogram]);

// Repacking
//
// Vessels of one flavor merge into one vessel of that flavor.

type Merged = EasyKindredRepack<pack![Capsule<pack![Meter]>, Capsule<pack![Second, Kilogram]>]>;

// Value packs
//
// Exponents of `m * kg^-1 * s^2`: the kilogram exponent is negated.

type Exponents = CognateModify<Shuttle, UnaryMinus, idx![1], vals![1, 1, 2]>;

fn main() {
    println!("== Types ==");
    println!("shaped:   {:?}", <Shaped as Inspect>::names());
    println!("merged:   {:?}", <Merged as Inspect>::names());
    println!("length:   {}", <Gauge<Base> as Peano>::VALUE);
    println!("second@:  {}", <Find<Base, Second> as Peano>::VALUE);
    println!("distinct: {}", <AreDistinct<Base> as Bool>::VALUE);

    println!("\n== Values ==");
    println!("exponents: {:?}", <Exponents as Recite>::values());
}
