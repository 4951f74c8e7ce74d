use rand::Rng;

/// Inclusive `(min, max)` bound used to randomize a count.
///
/// A range is only honoured when it is valid (`min > 0` and `max >= min`);
/// otherwise [`Range::resolve`] falls back to the supplied defaults.
/// An absent range is `None` at every call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
	pub min: i32,
	pub max: i32,
}

impl Range {
	pub const fn new(min: i32, max: i32) -> Self {
		Self { min, max }
	}

	/// `true` when `min > 0` and `max >= min`.
	pub fn is_valid(&self) -> bool {
		self.min > 0 && self.max >= self.min
	}

	/// Parses a `"min-max"` string such as `"3-6"`.
	///
	/// Returns `None` for anything that is not exactly two integers
	/// separated by a single `-`, or that does not form a valid range.
	pub fn parse(input: &str) -> Option<Self> {
		let mut parts = input.split('-');
		let (min, max) = match (parts.next(), parts.next(), parts.next()) {
			(Some(min), Some(max), None) => (min.trim().parse().ok()?, max.trim().parse().ok()?),
			_ => return None,
		};

		let range = Self::new(min, max);
		range.is_valid().then_some(range)
	}

	/// Picks a count uniformly in `range`, or in `defaults` when `range`
	/// is absent or invalid.
	///
	/// Never fails: defaults given in the wrong order are swapped.
	pub fn resolve<R: Rng + ?Sized>(rng: &mut R, range: Option<Range>, defaults: Range) -> i32 {
		let (min, max) = match range {
			Some(r) if r.is_valid() => (r.min, r.max),
			_ => (defaults.min.min(defaults.max), defaults.min.max(defaults.max)),
		};
		rng.random_range(min..=max)
	}
}
