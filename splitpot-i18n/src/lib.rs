#![warn(clippy::uninlined_format_args)]

#[cfg(all(feature = "en", feature = "de"))]
compile_error!("Cannot enable both 'en' and 'de' features at the same time");

#[cfg(feature = "de")]
pub mod strings {
    pub const MEMBER: &str = "Mitglied";
    pub const BALANCE: &str = "Saldo";
    pub const OWES: &str = "schuldet";
    pub const RECEIVES: &str = "erhält";
    pub const SETTLEMENT: &str = "Ausgleich";
    pub const NOTHING_TO_SETTLE: &str = "Nichts auszugleichen";
}

#[cfg(not(feature = "de"))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const OWES: &str = "owes";
    pub const RECEIVES: &str = "receives";
    pub const SETTLEMENT: &str = "Settlement";
    pub const NOTHING_TO_SETTLE: &str = "Nothing to settle";
}

pub use strings::*;
