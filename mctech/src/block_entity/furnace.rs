//! Blast furnace block entity.

use tracing::trace;

use crate::smelt::{find_smelting_recipe, get_fuel_ticks};
use crate::item::{self, ItemStack};
use crate::block::furnace;


/// Number of ticks needed to smelt one input item while the furnace burns.
pub const SMELT_TICKS: u32 = 200;

/// Slot index of the input stack, for host container screens.
pub const SLOT_INPUT: usize = 0;
/// Slot index of the fuel stack.
pub const SLOT_FUEL: usize = 1;
/// Slot index of the output stack.
pub const SLOT_OUTPUT: usize = 2;


#[derive(Debug, Clone, Default)]
pub struct BlastFurnaceBlockEntity {
    /// Input stack of the furnace.
    pub input_stack: ItemStack,
    /// Item stack for fueling the furnace.
    pub fuel_stack: ItemStack,
    /// Output stack of the furnace.
    pub output_stack: ItemStack,
    /// Current burn ticks remaining until a next fuel need to be consumed.
    pub burn_remaining_ticks: u32,
    /// Total burn ticks of the last consumed fuel, used by host screens to
    /// scale the burn indicator.
    pub burn_max_ticks: u32,
    /// Current ticks count since the current item started smelting.
    pub cook_ticks: u32,
}

impl BlastFurnaceBlockEntity {

    /// Get the stack in one of the 3 slots, empty for an unknown slot.
    pub fn get_stack(&self, slot: usize) -> ItemStack {
        match slot {
            SLOT_INPUT => self.input_stack,
            SLOT_FUEL => self.fuel_stack,
            SLOT_OUTPUT => self.output_stack,
            _ => ItemStack::EMPTY,
        }
    }

    /// Set the stack in one of the 3 slots, unknown slots are ignored.
    pub fn set_stack(&mut self, slot: usize, stack: ItemStack) {
        match slot {
            SLOT_INPUT => self.input_stack = stack,
            SLOT_FUEL => self.fuel_stack = stack,
            SLOT_OUTPUT => self.output_stack = stack,
            _ => {}
        }
    }

    /// Take every stack out of the furnace, leaving it empty. Used when the
    /// block is broken to drop its content instead of destroying it.
    pub fn take_stacks(&mut self) -> [ItemStack; 3] {
        [
            std::mem::take(&mut self.input_stack),
            std::mem::take(&mut self.fuel_stack),
            std::mem::take(&mut self.output_stack),
        ]
    }

    /// Return true if the given recipe output can be added to the output
    /// stack, it must be empty or hold the same item with room left.
    fn can_accept(&self, output: ItemStack) -> bool {
        self.output_stack.is_empty()
            || ((self.output_stack.id, self.output_stack.damage) == (output.id, output.damage)
                && self.output_stack.size + output.size <= item::max_stack_size(output.id))
    }

    /// Tick the furnace block entity. The metadata is the one of the furnace
    /// block carrying this entity, its lit bit is updated when the burn state
    /// changes, the host is expected to write it back and resync lighting.
    pub fn tick(&mut self, metadata: &mut u8) {

        let recipe = self.input_stack.to_non_empty()
            .and_then(find_smelting_recipe)
            .filter(|&output| self.can_accept(output));

        // Not burning, consume a new fuel if there is something to smelt.
        if self.burn_remaining_ticks == 0 && recipe.is_some() && !self.fuel_stack.is_empty() {
            let fuel_ticks = get_fuel_ticks(self.fuel_stack.id);
            if fuel_ticks != 0 {
                trace!("consumed {}, burning for {fuel_ticks} ticks", item::name(self.fuel_stack.id));
                self.fuel_stack.size -= 1;
                self.burn_max_ticks = fuel_ticks;
                self.burn_remaining_ticks = fuel_ticks;
            }
        }

        if self.burn_remaining_ticks != 0 {
            self.burn_remaining_ticks -= 1;
            if let Some(output) = recipe {
                self.cook_ticks += 1;
                if self.cook_ticks >= SMELT_TICKS {
                    trace!("smelted {} into {}", item::name(self.input_stack.id), item::name(output.id));
                    self.input_stack.size -= 1;
                    if self.output_stack.is_empty() {
                        self.output_stack = output;
                    } else {
                        self.output_stack.size += output.size;
                    }
                    self.cook_ticks = 0;
                }
            } else {
                self.cook_ticks = 0;
            }
        } else {
            self.cook_ticks = 0;
        }

        let lit = self.burn_remaining_ticks != 0;
        if lit != furnace::is_lit(*metadata) {
            furnace::set_lit(metadata, lit);
            trace!("furnace turned {}", if lit { "on" } else { "off" });
        }

    }

}


#[cfg(test)]
mod tests {

    use crate::{block, item};

    use super::*;

    fn furnace_with(input: ItemStack, fuel: ItemStack) -> BlastFurnaceBlockEntity {
        let mut entity = BlastFurnaceBlockEntity::default();
        entity.set_stack(SLOT_INPUT, input);
        entity.set_stack(SLOT_FUEL, fuel);
        entity
    }

    #[test]
    fn idle_without_fuel() {
        let mut entity = furnace_with(ItemStack::new_block(block::IRON_ORE, 0), ItemStack::EMPTY);
        let mut metadata = 2;
        entity.tick(&mut metadata);
        assert_eq!(metadata, 2);
        assert_eq!(entity.cook_ticks, 0);
        assert_eq!(entity.burn_remaining_ticks, 0);
    }

    #[test]
    fn idle_without_smeltable_input() {
        let mut entity = furnace_with(ItemStack::new_block(block::LIMESTONE, 0),
            ItemStack::new_single(item::COKE, 0));
        let mut metadata = 2;
        entity.tick(&mut metadata);
        // The fuel must not be consumed for nothing.
        assert_eq!(metadata, 2);
        assert_eq!(entity.fuel_stack.size, 1);
    }

    #[test]
    fn smelt_iron_ore_into_steel() {

        let mut entity = furnace_with(
            ItemStack::new_block(block::IRON_ORE, 0).with_size(2),
            ItemStack::new_single(item::COKE, 0));

        let mut metadata = 2;
        entity.tick(&mut metadata);

        assert!(furnace::is_lit(metadata));
        assert_eq!(metadata, 3);
        assert_eq!(entity.fuel_stack.size, 0);
        assert_eq!(entity.burn_max_ticks, 3200);
        assert_eq!(entity.burn_remaining_ticks, 3199);
        assert_eq!(entity.cook_ticks, 1);

        for _ in 0..(SMELT_TICKS - 1) {
            entity.tick(&mut metadata);
        }

        assert_eq!(entity.output_stack, ItemStack::new_single(item::STEEL_INGOT, 0));
        assert_eq!(entity.input_stack.size, 1);
        assert_eq!(entity.cook_ticks, 0);
        assert!(furnace::is_lit(metadata));

    }

    #[test]
    fn turns_off_when_fuel_runs_out() {

        let mut entity = furnace_with(
            ItemStack::new_block(block::IRON_ORE, 0).with_size(10),
            ItemStack::new_single(item::COAL, 0));

        let mut metadata = 6;
        for _ in 0..1600 {
            entity.tick(&mut metadata);
        }

        // One coal burns 1600 ticks, 8 smelts of 200 ticks each.
        assert_eq!(entity.output_stack.size, 8);
        assert_eq!(entity.input_stack.size, 2);
        assert_eq!(entity.burn_remaining_ticks, 0);
        assert!(!furnace::is_lit(metadata));
        assert_eq!(metadata, 6);

    }

    #[test]
    fn does_not_start_when_output_is_full() {
        let mut entity = furnace_with(
            ItemStack::new_block(block::IRON_ORE, 0),
            ItemStack::new_single(item::COKE, 0));
        entity.set_stack(SLOT_OUTPUT, ItemStack::new_single(item::STEEL_INGOT, 0).with_size(64));
        let mut metadata = 4;
        entity.tick(&mut metadata);
        assert_eq!(metadata, 4);
        assert_eq!(entity.fuel_stack.size, 1);
        assert_eq!(entity.cook_ticks, 0);
    }

    #[test]
    fn take_stacks_empties_the_furnace() {
        let mut entity = furnace_with(
            ItemStack::new_block(block::IRON_ORE, 0),
            ItemStack::new_single(item::COKE, 0));
        assert_eq!(entity.get_stack(SLOT_FUEL), ItemStack::new_single(item::COKE, 0));
        assert_eq!(entity.get_stack(7), ItemStack::EMPTY);
        let stacks = entity.take_stacks();
        assert_eq!(stacks[SLOT_INPUT], ItemStack::new_block(block::IRON_ORE, 0));
        assert_eq!(stacks[SLOT_FUEL], ItemStack::new_single(item::COKE, 0));
        assert!(stacks[SLOT_OUTPUT].is_empty());
        assert!(entity.input_stack.is_empty());
        assert!(entity.fuel_stack.is_empty());
    }

}
