//! Fuzz target for the hex form used by text color tags.

#![no_main]

use libfuzzer_sys::fuzz_target;
use rich_text_engine::{PackedRgba, Rgba};

fuzz_target!(|data: &str| {
    let Some(color) = Rgba::from_hex(data) else {
        return;
    };

    let (r, g, b, a) = color.to_rgba_u8();
    let packed = PackedRgba::from_rgba_u8(r, g, b, a);
    assert_eq!(packed.to_rgba_u8(), (r, g, b, a));

    for (idx, _) in data.char_indices().take(10) {
        let _ = Rgba::from_hex(&data[idx..]);
    }
});
