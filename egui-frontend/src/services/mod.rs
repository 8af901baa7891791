//! Services for talking to the expense API.
//!
//! Everything under this module is independent of egui: the transport
//! client, the typed repository over it, the session cache for reference
//! data, and the date codec the wire format depends on.

pub mod api;
pub mod date_utils;
pub mod expenses;
pub mod reference_data;

#[cfg(test)]
pub mod test_support;
