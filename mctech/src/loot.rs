//! Looting functions for the content of broken container blocks.

use glam::{DVec3, IVec3};
use rand::Rng;

use crate::item::ItemStack;


/// An item stack to spawn as an item entity in the world after its container
/// block has been broken.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDrop {
    /// World position to spawn the item entity at.
    pub pos: DVec3,
    /// Initial velocity of the item entity.
    pub vel: DVec3,
    /// The dropped stack.
    pub stack: ItemStack,
}

/// Compute the item drops for the stacks contained in a container block
/// being broken at the given position. Empty stacks produce no drop. Each
/// drop spawns somewhere inside the broken block with a small random
/// horizontal velocity and an upward pop, the host spawns the entities.
pub fn drop_container_stacks(pos: IVec3, stacks: &[ItemStack], rand: &mut impl Rng) -> Vec<ItemDrop> {

    const SPEED: f64 = 0.05;

    stacks.iter().copied()
        .filter_map(ItemStack::to_non_empty)
        .map(|stack| ItemDrop {
            pos: pos.as_dvec3() + DVec3::new(
                rand.gen_range(0.0..1.0),
                rand.gen_range(0.0..1.0),
                rand.gen_range(0.0..1.0)),
            vel: DVec3::new(
                (rand.gen_range(0.0..1.0) - 0.5) * SPEED,
                (rand.gen_range(0.0..1.0) + 4.0) * SPEED,
                (rand.gen_range(0.0..1.0) - 0.5) * SPEED),
            stack,
        })
        .collect()

}


#[cfg(test)]
mod tests {

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::{block, item};

    use super::*;

    #[test]
    fn empty_stacks_produce_no_drop() {

        let mut rand = StdRng::seed_from_u64(42);
        let stacks = [
            ItemStack::new_block(block::IRON_ORE, 0).with_size(3),
            ItemStack::EMPTY,
            ItemStack::new_single(item::COKE, 0),
        ];

        let drops = drop_container_stacks(IVec3::new(0, 70, 0), &stacks, &mut rand);
        assert_eq!(drops.len(), 2);
        assert_eq!(drops[0].stack, stacks[0]);
        assert_eq!(drops[1].stack, stacks[2]);

    }

    #[test]
    fn drops_spawn_inside_the_broken_block() {

        let mut rand = StdRng::seed_from_u64(42);
        let pos = IVec3::new(-3, 12, 7);
        let stacks = [ItemStack::new_single(item::STEEL_INGOT, 0); 8];

        for drop in drop_container_stacks(pos, &stacks, &mut rand) {
            let rel = drop.pos - pos.as_dvec3();
            assert!(rel.cmpge(DVec3::ZERO).all() && rel.cmplt(DVec3::ONE).all());
            assert!(drop.vel.x.abs() <= 0.025 && drop.vel.z.abs() <= 0.025);
            assert!(drop.vel.y >= 0.2 && drop.vel.y < 0.25);
        }

    }

}
