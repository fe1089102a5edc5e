//! Offset header of a material block
//!
//! Layout (20 bytes):
//! - `u32` offset of the string block
//! - `u32` x4 offsets of the material slots
//!
//! A slot offset of 0 means "unchanged from the previous slot", i.e. the
//! slot is empty. It never points at byte 0.

use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Write};

use crate::error::{Error, Result};

/// Size of the offset header in bytes
pub const HEADER_SIZE: usize = 20;

/// Number of material slots the header can address
pub const MATERIAL_SLOTS: usize = 4;

/// One material slot of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotOffset {
    /// Same as the previous slot; no material here
    Unchanged,
    /// Material starts at this offset from the header start
    At(u32),
}

impl SlotOffset {
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        if raw == 0 {
            SlotOffset::Unchanged
        } else {
            SlotOffset::At(raw)
        }
    }

    #[must_use]
    pub fn raw(self) -> u32 {
        match self {
            SlotOffset::Unchanged => 0,
            SlotOffset::At(offset) => offset,
        }
    }
}

/// The parsed offset header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetHeader {
    /// Offset of the string block from the header start
    pub string_block: u32,
    pub slots: [SlotOffset; MATERIAL_SLOTS],
}

impl OffsetHeader {
    /// Build a header from material offsets relative to the start of the
    /// material block.
    ///
    /// Slots past the last material repeat the previous offset and are
    /// written as [`SlotOffset::Unchanged`], as is any slot whose offset
    /// equals its predecessor's.
    #[must_use]
    pub fn from_relative(relative: &[u32], block_start: u32, string_block: u32) -> Self {
        let mut slots = [SlotOffset::Unchanged; MATERIAL_SLOTS];
        let mut previous: Option<u32> = None;

        for (i, slot) in slots.iter_mut().enumerate() {
            let current = relative.get(i).copied().or(previous).unwrap_or(0);
            *slot = if i > 0 && previous == Some(current) {
                SlotOffset::Unchanged
            } else {
                SlotOffset::At(block_start + current)
            };
            previous = Some(current);
        }

        Self {
            string_block,
            slots,
        }
    }

    /// Offsets of the materials that are actually present, in slot order
    #[must_use]
    pub fn material_offsets(&self) -> Vec<u32> {
        let mut offsets = Vec::new();
        let mut previous: Option<u32> = None;

        for slot in self.slots {
            if let SlotOffset::At(offset) = slot {
                // An offset equal to the previous one is an empty slot too.
                if previous != Some(offset) {
                    offsets.push(offset);
                }
                previous = Some(offset);
            }
        }
        offsets
    }

    /// Read the header at `start`
    ///
    /// # Errors
    /// Returns [`Error::HeaderTooShort`] if fewer than [`HEADER_SIZE`] bytes remain.
    pub fn read<B: ByteOrder>(data: &[u8], start: usize) -> Result<Self> {
        let available = data.len().saturating_sub(start);
        if available < HEADER_SIZE {
            return Err(Error::HeaderTooShort {
                offset: start,
                needed: HEADER_SIZE,
                available,
            });
        }

        let mut cursor = Cursor::new(&data[start..start + HEADER_SIZE]);
        let string_block = cursor.read_u32::<B>()?;
        let mut slots = [SlotOffset::Unchanged; MATERIAL_SLOTS];
        for slot in &mut slots {
            *slot = SlotOffset::from_raw(cursor.read_u32::<B>()?);
        }

        Ok(Self {
            string_block,
            slots,
        })
    }

    /// Write the header
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write<B: ByteOrder, W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<B>(self.string_block)?;
        for slot in self.slots {
            writer.write_u32::<B>(slot.raw())?;
        }
        Ok(())
    }
}
