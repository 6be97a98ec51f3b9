// Tile-creating and tile-altering effects triggered by charms and power-plays

use rand::{seq::IndexedRandom, Rng};

use crate::{
    game::{bag::Draw, TileBag},
    models::{tile_id, ModifierState, Slot, Tile},
};

/// Chance per tile for Mutation Protocol to create a super tile
pub const SUPER_TILE_CHANCE: f64 = 0.25;

/// Temporary value granted by One Tile to Rule Them All
pub const RULER_TILE_POINTS: u32 = 25;

/// Chance per upgraded tile for Recycler to hand back a copy
pub const RECYCLE_CHANCE: f64 = 0.5;

fn occupied_indices(hand: &[Slot]) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.as_ref().map(|_| index))
        .collect()
}

/// Hookshot: add a twin of the tile at `index`, marked as a duplicate.
/// The twin fills the first empty slot, or extends the hand when it is full.
pub fn duplicate_tile(mut hand: Vec<Slot>, index: usize, rng: &mut impl Rng) -> Vec<Slot> {
    let Some(Some(original)) = hand.get(index) else {
        return hand;
    };

    let twin = Tile {
        id: tile_id(rng),
        is_duplicate: true,
        ..original.clone()
    };

    match hand.iter().position(Option::is_none) {
        Some(empty) => hand[empty] = Some(twin),
        None => hand.push(Some(twin)),
    }
    hand
}

/// Mutation Protocol: each plain tile may turn into a super tile
pub fn mutate_tiles(tiles: Vec<Tile>, rng: &mut impl Rng) -> Vec<Tile> {
    tiles
        .into_iter()
        .map(|mut tile| {
            if !tile.is_super && rng.random_bool(SUPER_TILE_CHANCE) {
                tracing::debug!("Super tile created from {}", tile.letter);
                tile.is_super = true;
            }
            tile
        })
        .collect()
}

/// One Tile to Rule Them All: a random tile in the hand is temporarily worth 25
pub fn assign_temp_points(mut hand: Vec<Slot>, rng: &mut impl Rng) -> Vec<Slot> {
    if let Some(&index) = occupied_indices(&hand).choose(rng) {
        if let Some(tile) = hand[index].as_mut() {
            tile.temp_points = Some(RULER_TILE_POINTS);
        }
    }
    hand
}

/// Dice Roll Protocol: swap a random tile through the bag; the new tile
/// carries a x2 word multiplier
pub fn dice_roll(mut hand: Vec<Slot>, bag: TileBag, rng: &mut impl Rng) -> (Vec<Slot>, TileBag) {
    let Some(&index) = occupied_indices(&hand).choose(rng) else {
        return (hand, bag);
    };
    let Some(old) = hand[index].take() else {
        return (hand, bag);
    };

    let Draw { tiles, bag, .. } = bag.return_letters([old.letter], rng).draw(1, rng);
    hand[index] = tiles.into_iter().next().map(|tile| tile.with_multiplier(2));

    (hand, bag)
}

/// Recycler: each played tile whose letter has been upgraded may come back
/// as a fresh tile
pub fn recycle_tiles(used: &[Tile], modifiers: &ModifierState, rng: &mut impl Rng) -> Vec<Tile> {
    let mut recycled = Vec::new();
    for tile in used {
        if modifiers.letter_multiplier(tile.letter) > 1 && rng.random_bool(RECYCLE_CHANCE) {
            recycled.push(Tile::with_random_id(tile.letter, &mut *rng));
        }
    }
    recycled
}

/// Drop Hookshot duplicates at the end of a round, then pad or cut the hand
/// back to `rack_size` slots
pub fn strip_duplicates(hand: Vec<Slot>, rack_size: usize) -> Vec<Slot> {
    let mut clean: Vec<Slot> = hand
        .into_iter()
        .filter(|slot| !slot.as_ref().is_some_and(|tile| tile.is_duplicate))
        .collect();
    clean.resize(rack_size, None);
    clean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::occupied;
    use rand::{rngs::StdRng, SeedableRng};

    fn slots(letters: &str, rng: &mut impl Rng) -> Vec<Slot> {
        letters
            .chars()
            .map(|c| if c == '_' { None } else { Some(Tile::with_random_id(c, &mut *rng)) })
            .collect()
    }

    #[test]
    fn test_duplicate_fills_empty_slot() {
        let mut rng = StdRng::seed_from_u64(1);
        let hand = slots("Q_A", &mut rng);
        let original = hand[0].clone().unwrap();

        let hand = duplicate_tile(hand, 0, &mut rng);
        assert_eq!(hand.len(), 3);

        let twin = hand[1].as_ref().unwrap();
        assert_eq!(twin.letter, 'Q');
        assert!(twin.is_duplicate);
        assert_ne!(twin.id, original.id, "Twins get their own id");
        assert!(!hand[0].as_ref().unwrap().is_duplicate);
    }

    #[test]
    fn test_duplicate_extends_full_hand() {
        let mut rng = StdRng::seed_from_u64(2);
        let hand = duplicate_tile(slots("AB", &mut rng), 1, &mut rng);
        assert_eq!(hand.len(), 3);
        assert_eq!(hand[2].as_ref().unwrap().letter, 'B');

        let unchanged = duplicate_tile(slots("A_", &mut rng), 1, &mut rng);
        assert_eq!(occupied(&unchanged).count(), 1, "Empty slots cannot be duplicated");
    }

    #[test]
    fn test_mutation_creates_super_tiles() {
        let mut rng = StdRng::seed_from_u64(3);
        let tiles: Vec<Tile> = (0..200).map(|_| Tile::with_random_id('E', &mut rng)).collect();

        let mutated = mutate_tiles(tiles, &mut rng);
        let supers = mutated.iter().filter(|t| t.is_super).count();
        assert!(supers > 20 && supers < 90, "Got {} super tiles", supers);

        let again = mutate_tiles(mutated, &mut rng);
        assert!(again.iter().filter(|t| t.is_super).count() >= supers, "Super tiles stay super");
    }

    #[test]
    fn test_assign_temp_points_marks_one_tile() {
        let mut rng = StdRng::seed_from_u64(4);
        let hand = assign_temp_points(slots("CA_T", &mut rng), &mut rng);

        let marked: Vec<&Tile> = occupied(&hand).filter(|t| t.temp_points.is_some()).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].points(), RULER_TILE_POINTS);
        assert!(hand[2].is_none());

        let empty = assign_temp_points(vec![None; 3], &mut rng);
        assert_eq!(empty, vec![None; 3]);
    }

    #[test]
    fn test_dice_roll_swaps_one_tile() {
        let mut rng = StdRng::seed_from_u64(5);
        let hand = slots("CAT_", &mut rng);
        let bag = TileBag::full(&mut rng);

        let (rolled, bag) = dice_roll(hand.clone(), bag, &mut rng);
        assert_eq!(bag.len(), 100, "One letter returned, one drawn");
        assert_eq!(occupied(&rolled).count(), 3);
        assert!(rolled[3].is_none());

        let changed: Vec<usize> = (0..3).filter(|i| rolled[*i] != hand[*i]).collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(rolled[changed[0]].as_ref().unwrap().multiplier, 2);
    }

    #[test]
    fn test_recycler_needs_upgraded_letters() {
        let mut rng = StdRng::seed_from_u64(6);
        let used: Vec<Tile> = (0..200).map(|_| Tile::with_random_id('C', &mut rng)).collect();

        assert!(recycle_tiles(&used, &ModifierState::new(), &mut rng).is_empty());

        let upgraded = ModifierState::new().with_letter_upgrade('C');
        let recycled = recycle_tiles(&used, &upgraded, &mut rng);
        assert!(recycled.len() > 60 && recycled.len() < 140, "Got {}", recycled.len());
        assert!(recycled.iter().all(|t| t.letter == 'C' && !t.is_duplicate));
    }

    #[test]
    fn test_strip_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        let hand = duplicate_tile(slots("ABC", &mut rng), 0, &mut rng);
        assert_eq!(hand.len(), 4);

        let clean = strip_duplicates(hand, 5);
        assert_eq!(clean.len(), 5);
        assert_eq!(occupied(&clean).count(), 3);
        assert!(occupied(&clean).all(|t| !t.is_duplicate));
    }
}
