use super::distribution::Distribution;
use super::outcome::Outcome;

/// Fair coin over the labels `Heads` and `Tails`.
pub fn coin() -> Distribution<Outcome> {
    Distribution::uniform([Outcome::label("Heads"), Outcome::label("Tails")])
}
/// Fair die over `1..=sides`. A die with no sides is empty.
pub fn die(sides: u32) -> Distribution<Outcome> {
    Distribution::uniform((1..=sides).map(Outcome::from))
}
pub fn d4() -> Distribution<Outcome> {
    die(4)
}
pub fn d6() -> Distribution<Outcome> {
    die(6)
}
pub fn d8() -> Distribution<Outcome> {
    die(8)
}
pub fn d10() -> Distribution<Outcome> {
    die(10)
}
pub fn d12() -> Distribution<Outcome> {
    die(12)
}
pub fn d20() -> Distribution<Outcome> {
    die(20)
}

/// Dice notation: the sum of `count` fair dice with `sides` faces each.
/// Written `NdS`, or `dS` for a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice {
    count: u32,
    sides: u32,
}

impl Dice {
    pub const DELIM: char = 'd';
    pub fn new(count: u32, sides: u32) -> Self {
        Self { count, sides }
    }
    /// Distribution of the sum. Rolling no dice always totals 0.
    pub fn roll(&self) -> Distribution<Outcome> {
        let ref single = die(self.sides);
        (0..self.count).fold(Distribution::point(Outcome::Int(0)), |sum, _| sum + single)
    }
}

impl TryFrom<&str> for Dice {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim().to_lowercase();
        let (count, sides) = s
            .split_once(Self::DELIM)
            .ok_or_else(|| anyhow::anyhow!("missing '{}' in dice notation: {}", Self::DELIM, s))?;
        let count = match count.trim() {
            "" => 1,
            n => n
                .parse::<u32>()
                .map_err(|e| anyhow::anyhow!("invalid dice count {:?}: {}", n, e))?,
        };
        let sides = sides
            .trim()
            .parse::<u32>()
            .map_err(|e| anyhow::anyhow!("invalid die sides {:?}: {}", sides, e))?;
        if sides == 0 {
            return Err(anyhow::anyhow!("dice need at least one side: {}", s));
        }
        Ok(Self::new(count, sides))
    }
}

impl std::str::FromStr for Dice {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.count, Self::DELIM, self.sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Probability;

    fn close(a: Probability, b: Probability) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn is_preset_uniform() {
        for (d, n) in [(d4(), 4), (d6(), 6), (d8(), 8), (d10(), 10), (d12(), 12), (d20(), 20)] {
            assert!(d.len() == n);
            assert!(d.ensure().is_ok());
            assert!(d.support().cloned().eq((1..=n as i64).map(Outcome::Int)));
            assert!(d.iter().all(|(_, p)| close(p, 1. / n as Probability)));
        }
    }

    #[test]
    fn is_coin_fair() {
        let c = coin();
        assert!(c.to_string() == "Distribution(Heads: 0.50, Tails: 0.50)");
    }

    #[test]
    fn is_sideless_die_empty() {
        assert!(die(0).is_empty());
    }

    #[test]
    fn is_notation_parsed() {
        assert!(Dice::try_from("3d6").unwrap() == Dice::new(3, 6));
        assert!(Dice::try_from(" D20 ").unwrap() == Dice::new(1, 20));
        assert!(Dice::try_from("0d4").unwrap() == Dice::new(0, 4));
        assert!("2d8".parse::<Dice>().unwrap().to_string() == "2d8");
    }

    #[test]
    fn is_notation_rejected() {
        assert!(Dice::try_from("6").is_err());
        assert!(Dice::try_from("xd6").is_err());
        assert!(Dice::try_from("2d").is_err());
        assert!(Dice::try_from("2d0").is_err());
        assert!(Dice::try_from("-1d6").is_err());
    }

    #[test]
    fn is_three_dice_bell() {
        let sum = Dice::new(3, 6).roll();
        assert!(sum.len() == 16);
        assert!(close(sum.density(&Outcome::Int(10)), 27. / 216.));
        assert!(close(sum.density(&Outcome::Int(3)), 1. / 216.));
        assert!(sum.ensure().is_ok());
    }

    #[test]
    fn is_single_die_roll_die() {
        assert!(Dice::new(1, 6).roll() == d6() + 0);
    }

    #[test]
    fn is_no_dice_zero() {
        let none = Dice::new(0, 6).roll();
        assert!(none.density(&Outcome::Int(0)) == 1.);
    }
}
