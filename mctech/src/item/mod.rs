//! Item enumeration and behaviors.

use crate::block;


/// Internal macro to easily define the items registry.
macro_rules! items {
    (
        $($ident:ident / $id:literal : $init:expr),* $(,)?
    ) => {

        static ITEMS: [Item; 16] = {
            let mut arr = [Item::new("undefined", 64); 16];
            $(arr[$id as usize] = $init;)*
            arr
        };

        $(pub const $ident: u16 = $id + 256;)*

    };
}

items! {
    COAL/0:         Item::new("coal", 64),
    COKE/1:         Item::new("coke", 64),
    STEEL_INGOT/2:  Item::new("steel_ingot", 64),
}


/// Get the name of an item or block from its stack id, item ids start at 256,
/// below that they are block ids.
pub fn name(id: u16) -> &'static str {
    if id < 256 {
        block::name(id as u8)
    } else {
        ITEMS[(id - 256) as usize].name
    }
}

/// Get the maximum stack size for the given stack id, blocks all stack to 64.
pub fn max_stack_size(id: u16) -> u16 {
    if id < 256 {
        64
    } else {
        ITEMS[(id - 256) as usize].max_stack_size
    }
}


/// This structure describe an item.
#[derive(Debug, Clone, Copy)]
pub struct Item {
    /// The name of the item, used for debug purpose.
    pub name: &'static str,
    /// Maximum stack size for this item.
    pub max_stack_size: u16,
}

impl Item {

    pub const fn new(name: &'static str, max_stack_size: u16) -> Self {
        Self { name, max_stack_size }
    }

}


/// An item stack defines the actual number of items and their damage value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemStack {
    /// The item id.
    pub id: u16,
    /// The stack size.
    pub size: u16,
    /// The damage value of the stack.
    pub damage: u16,
}

impl ItemStack {

    pub const EMPTY: Self = Self { id: block::AIR as u16, size: 0, damage: 0 };

    /// Create a stack of a single block.
    pub const fn new_block(id: u8, damage: u16) -> Self {
        Self { id: id as u16, size: 1, damage }
    }

    /// Create a stack of a single item.
    pub const fn new_single(id: u16, damage: u16) -> Self {
        Self { id, size: 1, damage }
    }

    pub fn with_size(mut self, size: u16) -> ItemStack {
        self.size = size;
        self
    }

    /// Return true if this item stack is air, which is a special case where
    /// the item stack represent an empty slot.
    pub fn is_empty(self) -> bool {
        self.id == block::AIR as u16 || self.size == 0
    }

    /// Simplify this item stack by converting it into `None` if the item is
    /// just an air block, which is equivalent to no item, regardless of the
    /// damage value or stack size.
    pub fn to_non_empty(self) -> Option<ItemStack> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

}


/// A creative inventory tab. Hosts construct the tabs they show explicitly
/// and pass them where needed, there is no process-global registry.
#[derive(Debug, Clone)]
pub struct CreativeTab {
    /// Display name of the tab.
    pub name: &'static str,
    /// The stacks shown in the tab, in order.
    pub items: Vec<ItemStack>,
}

/// Build the creative tab listing the content blocks and items of this crate.
pub fn creative_tab() -> CreativeTab {
    CreativeTab {
        name: "mctech",
        items: vec![
            ItemStack::new_block(block::LIMESTONE, 0),
            ItemStack::new_block(block::COKE_BLOCK, 0),
            ItemStack::new_block(block::BLAST_FURNACE, 0),
            ItemStack::new_single(COKE, 0),
            ItemStack::new_single(STEEL_INGOT, 0),
        ],
    }
}
