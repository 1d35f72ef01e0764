//! Blast furnace block metadata functions.
//!
//! The metadata value packs the front face and the lit state of the furnace:
//! the even part is the side index of the front face doubled, the low bit is
//! the lit flag. The 8 oriented values are therefore 2/4/6/8 for an unlit
//! furnace and 3/5/7/9 for a lit one.

use glam::{DVec3, IVec3};
use rand::Rng;
use thiserror::Error;

use crate::geom::Face;


/// Get the front face of the furnace.
#[inline]
pub fn get_face(metadata: u8) -> Option<Face> {
    Some(match metadata & !1 {
        2 => Face::NegZ,
        4 => Face::PosZ,
        6 => Face::NegX,
        8 => Face::PosX,
        _ => return None
    })
}

/// Set the front face of the furnace, the lit state is kept.
#[inline]
pub fn set_face(metadata: &mut u8, face: Face) {
    *metadata = (*metadata & 1) | match face {
        Face::NegZ => 2,
        Face::PosZ => 4,
        Face::NegX => 6,
        Face::PosX => 8,
        _ => 2,
    };
}

/// Return true if the furnace is lit, this is encoded in metadata parity.
#[inline]
pub fn is_lit(metadata: u8) -> bool {
    metadata & 1 != 0
}

/// Set the lit state of the furnace, the front face is kept.
#[inline]
pub fn set_lit(metadata: &mut u8, lit: bool) {
    *metadata = (*metadata & !1) | lit as u8;
}

/// Compute the metadata of a freshly placed, unlit furnace from the yaw of
/// the player placing it, in degrees, so that the front faces the player.
pub fn place_metadata(yaw: f32) -> u8 {
    let mut metadata = 0;
    set_face(&mut metadata, Face::from_yaw(yaw).opposite());
    metadata
}


/// The different textures shown on the faces of the furnace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Top and bottom faces.
    Vertical,
    /// Horizontal faces other than the front one.
    Side,
    /// The front face of an unlit furnace.
    FrontOff,
    /// The front face of a lit furnace.
    FrontOn,
}

/// Get the icon shown on the given face of the furnace. A metadata of zero is
/// the item form of the block, its front is rendered on the +Z face.
pub fn get_icon(face: Face, metadata: u8) -> Icon {
    if face.is_y() {
        Icon::Vertical
    } else if get_face(metadata) == Some(face) || (metadata == 0 && face == Face::PosZ) {
        if is_lit(metadata) { Icon::FrontOn } else { Icon::FrontOff }
    } else {
        Icon::Side
    }
}


/// The texture names of the four furnace icons. Hosts pass a set to their
/// texture registration, there is no global icon registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub vertical: &'static str,
    pub side: &'static str,
    pub front_off: &'static str,
    pub front_on: &'static str,
}

impl IconSet {

    /// The default blast furnace texture names.
    pub const DEFAULT: Self = Self {
        vertical: "blast_furnace_vertical",
        side: "blast_furnace_sides",
        front_off: "blast_furnace_front_off",
        front_on: "blast_furnace_front_on",
    };

    /// Get the texture name for the given icon.
    pub fn texture(self, icon: Icon) -> &'static str {
        match icon {
            Icon::Vertical => self.vertical,
            Icon::Side => self.side,
            Icon::FrontOff => self.front_off,
            Icon::FrontOn => self.front_on,
        }
    }

}


/// Get the face smoke and flame particles escape from. Only the four lit,
/// oriented metadata values emit particles.
pub fn get_particle_face(metadata: u8) -> Option<Face> {
    if is_lit(metadata) {
        get_face(metadata)
    } else {
        None
    }
}

/// Sample a position for the fire particles of a lit furnace at the given
/// position. The position sits just outside the front face, at a random
/// height in the lower part of the block and randomly offset along the face.
/// The host is expected to spawn a smoke and a flame particle there. Unlit
/// or unoriented furnaces return no position.
pub fn get_particle_pos(pos: IVec3, metadata: u8, rand: &mut impl Rng) -> Option<DVec3> {

    const DEPTH: f64 = 0.52;

    let face = get_particle_face(metadata)?;
    let y = rand.gen_range(0.0..(6.0 / 16.0));
    let jitter = rand.gen_range(-0.3..0.3);

    let offset = match face {
        Face::NegZ => DVec3::new(jitter, y, -DEPTH),
        Face::PosZ => DVec3::new(jitter, y, DEPTH),
        Face::NegX => DVec3::new(-DEPTH, y, jitter),
        Face::PosX => DVec3::new(DEPTH, y, jitter),
        _ => unreachable!()
    };

    Some(pos.as_dvec3() + DVec3::new(0.5, 0.0, 0.5) + offset)

}


/// Error returned when strictly decoding a metadata value outside of the 8
/// oriented furnace values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid furnace metadata: {0}")]
pub struct InvalidMetadata(pub u8);

/// The decoded state of a furnace, for hosts that want strict validation of
/// stored metadata instead of the per-bit accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FurnaceState {
    /// The horizontal face the front of the furnace is on.
    pub face: Face,
    /// Whether the furnace is currently burning fuel.
    pub lit: bool,
}

impl FurnaceState {

    /// Decode a metadata value, values outside of the 8 oriented ones are
    /// rejected, including the zero metadata of the item form.
    pub fn decode(metadata: u8) -> Result<Self, InvalidMetadata> {
        let face = get_face(metadata).ok_or(InvalidMetadata(metadata))?;
        Ok(Self { face, lit: is_lit(metadata) })
    }

    /// Encode this state back into a metadata value.
    pub fn encode(self) -> u8 {
        let mut metadata = 0;
        set_face(&mut metadata, self.face);
        set_lit(&mut metadata, self.lit);
        metadata
    }

}
