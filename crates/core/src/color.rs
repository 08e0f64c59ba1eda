//! Light variant colors.
//!
//! Channels are rendered without zero padding, so a channel of 0-15 comes out
//! as a single hex digit (`#ffffff` inverts to `#000`). Existing themes ship
//! these values, keep it that way.

/// Rendering of a channel that has no leading hex digits.
const NAN: &str = "NaN";

/// Invert a `#rrggbb` color channel by channel (`255 - value`).
///
/// Input is not validated: each channel is read from its two characters up to
/// the first non-hex digit, and a channel with no digits at all renders as
/// `NaN`.
pub fn invert_color(color: &str) -> String {
    let chars: Vec<char> = color.chars().collect();
    let mut inverted = String::from("#");
    for start in [1, 3, 5] {
        let channel: String = chars.iter().skip(start).take(2).collect();
        match parse_channel(&channel) {
            Some(value) => inverted.push_str(&format!("{:x}", 255 - value)),
            None => inverted.push_str(NAN),
        }
    }
    inverted
}

/// Leading hex digits of `channel` as a number, `None` if there are none.
fn parse_channel(channel: &str) -> Option<i32> {
    let digits: String = channel.chars().take_while(char::is_ascii_hexdigit).collect();
    if digits.is_empty() {
        return None;
    }
    i32::from_str_radix(&digits, 16).ok()
}
