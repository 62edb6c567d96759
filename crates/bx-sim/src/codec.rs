//! Boundary codec. Compacts identity fields right before sink handoff.

use bx_core::CrossingEvent;
use bx_core::country::to_iso1;

/// Rewrite the country to its single-letter code and replace the plate's
/// leading country segment with the same letter.
///
/// Plates without a `-` keep their text unchanged.
pub fn encode_event(event: &mut CrossingEvent) {
    let iso1 = to_iso1(event.identity.country);
    event.identity.country = iso1;
    if let Some((_, rest)) = event.identity.plate.split_once('-') {
        event.identity.plate = format!("{iso1}-{rest}");
    }
}

/// Apply [`encode_event`] to every row of a stream.
pub fn encode_stream(rows: &mut [CrossingEvent]) {
    rows.iter_mut().for_each(encode_event);
}
