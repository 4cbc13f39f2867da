//! Authored stat descriptions.
//!
//! Laid out category → subcategory → grade, in the declaration order of
//! `StatCategory::ALL`, `StatCategory::subcategories`, and `Grade::ALL`.
//! `None` marks a combination nobody has written yet.

use crate::value_objects::{CATEGORY_COUNT, GRADE_COUNT, SUBCATEGORIES_PER_CATEGORY};

pub(crate) type GradeDescriptions = [Option<&'static str>; GRADE_COUNT];
pub(crate) type CategoryDescriptions = [GradeDescriptions; SUBCATEGORIES_PER_CATEGORY];

pub(crate) const STRENGTH: CategoryDescriptions = [
    // Lifting
    [
        Some("Struggles with a full backpack."),
        Some("Carries groceries and furniture like any healthy adult."),
        Some("Deadlifts several times their own body weight."),
        Some("Tips over cars and holds up collapsing doorways."),
        Some("Lifts trucks and shoulders fallen girders."),
        Some("Raises buildings from their foundations."),
        Some("Moves mountains and drags ships out of orbit."),
        Some("Weight stops being a meaningful concept."),
    ],
    // Striking
    [
        Some("Punches barely leave a bruise."),
        Some("Hits as hard as a trained amateur boxer."),
        Some("Blows crack bone and dent sheet metal."),
        Some("Punches through brick walls."),
        Some("A single strike levels a house."),
        Some("Shockwaves from a blow flatten city blocks."),
        Some("Impacts carve craters visible from orbit."),
        None,
    ],
    // Grappling
    [
        Some("Easily shaken off."),
        Some("Holds an untrained opponent for a few seconds."),
        Some("Pins most people and wrestles large animals."),
        Some("Restrains vehicles and bends steel bars."),
        Some("Crushes armored opponents in a hold."),
        Some("Holds down creatures the size of buildings."),
        None,
        None,
    ],
    // Throwing
    [
        Some("Throws a ball a short distance."),
        Some("Throws about as far as an athlete."),
        Some("Hurls heavy stones with lethal force."),
        Some("Throws motorcycles across a street."),
        Some("Launches cars over skylines."),
        Some("Sends buildings airborne."),
        Some("Throws objects into orbit."),
        None,
    ],
];

pub(crate) const DURABILITY: CategoryDescriptions = [
    // Toughness
    [
        Some("Bruises from a stumble."),
        Some("Walks off a schoolyard fight."),
        Some("Shrugs off knives and blunt weapons."),
        Some("Bullets leave only welts."),
        Some("Survives explosions and collapsing buildings."),
        Some("Unharmed by artillery and direct lightning."),
        Some("Endures impacts that crack continents."),
        Some("Damage has nothing to take hold of."),
    ],
    // Endurance
    [
        Some("Winded after a flight of stairs."),
        Some("Runs a few miles before needing to rest."),
        Some("Fights for an hour without slowing."),
        Some("Keeps going for days without sleep."),
        Some("Sustains peak effort for weeks."),
        Some("Fatigue is a memory."),
        None,
        None,
    ],
    // Regeneration
    [
        Some("Heals slower than most."),
        Some("Heals at a normal human rate."),
        Some("Cuts close within minutes."),
        Some("Broken bones knit during a single fight."),
        Some("Regrows lost limbs."),
        Some("Recovers from near-total destruction."),
        Some("Reforms from scattered fragments."),
        None,
    ],
    // Resistance
    [
        Some("Easily sickened or burned."),
        Some("Ordinary tolerance to weather and illness."),
        Some("Ignores common poisons and harsh climates."),
        Some("Walks through fire without lasting harm."),
        Some("Immune to most toxins, radiation, and extreme temperatures."),
        Some("Wades through magma and survives vacuum."),
        None,
        None,
    ],
];

pub(crate) const AGILITY: CategoryDescriptions = [
    // Speed
    [
        Some("Slower than the average jogger."),
        Some("Sprints like a fit adult."),
        Some("Outpaces Olympic sprinters."),
        Some("Keeps pace with highway traffic."),
        Some("Breaks the sound barrier."),
        Some("Crosses a city in a blink."),
        Some("Circles the planet in seconds."),
        Some("Arrives before the decision to leave."),
    ],
    // Reflexes
    [
        Some("Fumbles anything thrown at them."),
        Some("Catches a tossed ball."),
        Some("Dodges punches on reaction."),
        Some("Sidesteps arrows and thrown blades."),
        Some("Dodges gunfire at close range."),
        Some("Reacts to lightning as it forms."),
        None,
        None,
    ],
    // Flexibility
    [
        Some("Can't touch their toes."),
        Some("Typical range of motion."),
        Some("Gymnast-level flexibility."),
        Some("Contorts through narrow gaps."),
        None,
        None,
        None,
        None,
    ],
    // Balance
    [
        Some("Trips over flat ground."),
        Some("Keeps footing on a moving bus."),
        Some("Runs along rooftops and railings."),
        Some("Fights on a tightrope."),
        Some("Stays upright through earthquakes."),
        Some("Stands on falling debris mid-collapse."),
        None,
        None,
    ],
];

pub(crate) const PRECISION: CategoryDescriptions = [
    // Accuracy
    [
        Some("Misses a stationary target at arm's length."),
        Some("Hits a dartboard most of the time."),
        Some("Marksman-level aim."),
        Some("Hits moving targets at long range."),
        Some("Threads shots through gaps in armor."),
        Some("Never misses what they can see."),
        Some("Hits targets they cannot see."),
        None,
    ],
    // Dexterity
    [
        Some("Clumsy with simple tools."),
        Some("Handles everyday tools comfortably."),
        Some("Picks locks and performs sleight of hand."),
        Some("Disarms traps mid-fight."),
        Some("Performs surgery at combat speed."),
        None,
        None,
        None,
    ],
    // Perception
    [
        Some("Misses obvious details."),
        Some("Notices what most people notice."),
        Some("Spots ambushes before they spring."),
        Some("Tracks fast movement others cannot follow."),
        Some("Senses heartbeats across a room."),
        Some("Perceives events across a city."),
        None,
        None,
    ],
    // Timing
    [
        Some("Always a beat late."),
        Some("Average sense of rhythm."),
        Some("Counters with practised timing."),
        Some("Parries attacks mid-swing."),
        Some("Acts in the gaps between heartbeats."),
        None,
        None,
        None,
    ],
];

pub(crate) const INTELLIGENCE: CategoryDescriptions = [
    // Reasoning
    [
        Some("Struggles with simple plans."),
        Some("Reasons through everyday problems."),
        Some("Solves puzzles under pressure."),
        Some("Deduces hidden mechanics mid-fight."),
        Some("Out-thinks expert strategists."),
        None,
        None,
        None,
    ],
    // Memory
    [
        Some("Forgets names within minutes."),
        Some("Ordinary recall."),
        Some("Remembers every opponent's tells."),
        Some("Recalls entire battles move for move."),
        None,
        None,
        None,
        None,
    ],
    // Tactics
    [
        Some("Charges in without a plan."),
        Some("Follows basic fight plans."),
        Some("Adapts tactics between exchanges."),
        Some("Sets traps several moves ahead."),
        Some("Commands battlefields with foresight."),
        Some("Predicts every contingency."),
        None,
        None,
    ],
    // Learning
    [
        Some("Needs repeated lessons to retain a skill."),
        Some("Learns at a typical pace."),
        Some("Picks up techniques after a few tries."),
        Some("Copies techniques after seeing them once."),
        None,
        None,
        None,
        None,
    ],
];

/// All categories in `StatCategory::ALL` order.
pub(crate) const BY_CATEGORY: [CategoryDescriptions; CATEGORY_COUNT] =
    [STRENGTH, DURABILITY, AGILITY, PRECISION, INTELLIGENCE];
