//! Item smelting management, recipe and fuel tables of the blast furnace.

use crate::item::ItemStack;
use crate::{block, item};


/// Find a smelting recipe output from given input stack. The input stack size
/// is ignored and the output stack size is how much is produced for one input
/// item.
pub fn find_smelting_recipe(input: ItemStack) -> Option<ItemStack> {
    for recipe in RECIPES {
        if (recipe.input.id, recipe.input.damage) == (input.id, input.damage) {
            return Some(recipe.output);
        }
    }
    None
}

/// Get the burn duration of the given stack id when used as furnace fuel, in
/// ticks, zero when it is not a fuel.
pub fn get_fuel_ticks(id: u16) -> u32 {
    const COKE_BLOCK: u16 = block::COKE_BLOCK as u16;
    match id {
        item::COAL => 1600,
        item::COKE => 3200,
        COKE_BLOCK => 14400,
        _ => 0,
    }
}

const RECIPES: &'static [Recipe] = &[
    Recipe::new(ItemStack::new_block(block::IRON_ORE, 0), ItemStack::new_single(item::STEEL_INGOT, 0)),
    Recipe::new(ItemStack::new_single(item::COAL, 0), ItemStack::new_single(item::COKE, 0)),
];

/// Define a smelting recipe.
struct Recipe {
    /// The item stack that is consumed to produce the output one.
    input: ItemStack,
    /// The output stack that is produced by consuming the input one.
    output: ItemStack,
}

impl Recipe {

    const fn new(input: ItemStack, output: ItemStack) -> Self {
        Self { input, output }
    }

}
