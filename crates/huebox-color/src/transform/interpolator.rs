//! Gradient interpolator and its builder.
//!
//! [`InterpolatorBuilder`] collects color stops and hints, then
//! [`build()`](InterpolatorBuilder::build) resolves them into an
//! [`Interpolator`] in a fixed sequence of passes:
//!
//! 1. endpoints without a position are placed at `0` and `1`
//! 2. positions are raised so they never decrease
//! 3. runs of stops without a position are spread evenly between their
//!    positioned neighbors, hints excluded. A hint left behind by the spread
//!    is raised to the stop before it.
//! 4. each hint becomes a stop with the midpoint color of its neighbors. A
//!    hint sitting on the stop before it is dropped.
//! 5. stops are converted into the target space and premultiplied
//! 6. hues of every polar component are adjusted across the whole run
//!
//! The built interpolator is immutable and can be shared between threads.

use super::easing::Easing;
use super::hue::HueAdjustment;
use super::method::{ChannelInterpolator, InterpolationMethod, Point};
use super::premultiply::{divide_alpha_in_place, multiply_alpha_in_place};
use crate::error::ColorError;
use crate::math::normalize_deg;
use crate::model::Color;
use crate::space::ColorSpace;

/// A color stop with optional positions and easing.
///
/// # Example
///
/// ```
/// use huebox_color::transform::{Easing, InterpolatorBuilder, Stop};
/// use huebox_color::{ColorSpace, Rgb};
///
/// let gradient = InterpolatorBuilder::new(ColorSpace::srgb())
///     .stop(Rgb::new(0.0, 0.0, 0.0))
///     .stop_with(Stop::new(Rgb::new(1.0, 0.0, 0.0)).at(0.5).easing(Easing::EASE_IN))
///     .stop(Rgb::new(1.0, 1.0, 1.0))
///     .build()
///     .unwrap();
///
/// assert_eq!(gradient.interpolate(0.25).to_srgb().to_u8(), [128, 0, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    color: Color,
    position: Option<f32>,
    position2: Option<f32>,
    easing: Option<Easing>,
}

impl Stop {
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
            position: None,
            position2: None,
            easing: None,
        }
    }

    /// Place the stop at `position`.
    #[inline]
    pub fn at(mut self, position: f32) -> Self {
        self.position = Some(position);
        self.position2 = None;
        self
    }

    /// Hold the color from `start` to `end`.
    #[inline]
    pub fn span(mut self, start: f32, end: f32) -> Self {
        self.position = Some(start);
        self.position2 = Some(end);
        self
    }

    /// Ease the transition from this stop to the next one.
    #[inline]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }
}

#[derive(Debug, Clone, Copy)]
enum EntryKind {
    Stop {
        color: Color,
        easing: Option<Easing>,
    },
    Hint,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    kind: EntryKind,
    position: Option<f32>,
}

impl Entry {
    #[inline]
    fn is_hint(&self) -> bool {
        matches!(self.kind, EntryKind::Hint)
    }
}

/// An entry whose position is final.
#[derive(Debug, Clone, Copy)]
struct Placed {
    kind: EntryKind,
    position: f32,
}

/// A stop after hint resolution.
#[derive(Debug, Clone, Copy)]
struct Knot {
    color: Color,
    position: f32,
    easing: Option<Easing>,
}

/// Builder for an [`Interpolator`].
///
/// # Defaults
///
/// - alpha premultiplication enabled
/// - [`HueAdjustment::Shorter`]
/// - [`Easing::Linear`]
/// - [`InterpolationMethod::Linear`]
///
/// Configuration methods consume and return `self`.
/// [`build()`](Self::build) takes `&self`, so one builder can produce several
/// interpolators.
///
/// # Example
///
/// ```
/// use huebox_color::transform::InterpolatorBuilder;
/// use huebox_color::{ColorSpace, Rgb};
///
/// let grays = InterpolatorBuilder::new(ColorSpace::srgb())
///     .stop(Rgb::from_u8(0, 0, 0))
///     .stop(Rgb::from_u8(254, 254, 254))
///     .build()
///     .unwrap();
///
/// assert_eq!(grays.interpolate(0.5).to_srgb().to_u8(), [127, 127, 127]);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatorBuilder {
    space: ColorSpace,
    entries: Vec<Entry>,
    premultiply_alpha: bool,
    hue_adjustment: HueAdjustment,
    easing: Easing,
    method: InterpolationMethod,
}

impl InterpolatorBuilder {
    /// Start a gradient that interpolates in `space`.
    pub fn new(space: ColorSpace) -> Self {
        Self {
            space,
            entries: Vec::new(),
            premultiply_alpha: true,
            hue_adjustment: HueAdjustment::default(),
            easing: Easing::default(),
            method: InterpolationMethod::default(),
        }
    }

    /// Scale components by alpha while interpolating.
    #[inline]
    pub fn premultiply_alpha(mut self, enabled: bool) -> Self {
        self.premultiply_alpha = enabled;
        self
    }

    #[inline]
    pub fn hue_adjustment(mut self, adjustment: HueAdjustment) -> Self {
        self.hue_adjustment = adjustment;
        self
    }

    /// Remap every lookup position before stops are searched.
    #[inline]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[inline]
    pub fn method(mut self, method: InterpolationMethod) -> Self {
        self.method = method;
        self
    }

    /// Add a stop without a position.
    #[inline]
    pub fn stop(self, color: impl Into<Color>) -> Self {
        self.stop_with(Stop::new(color))
    }

    #[inline]
    pub fn stop_at(self, color: impl Into<Color>, position: f32) -> Self {
        self.stop_with(Stop::new(color).at(position))
    }

    /// Add a stop held from `start` to `end`.
    #[inline]
    pub fn stop_span(self, color: impl Into<Color>, start: f32, end: f32) -> Self {
        self.stop_with(Stop::new(color).span(start, end))
    }

    /// Add a fully configured stop.
    ///
    /// A spanned stop becomes two stops. Its easing belongs to the second,
    /// which starts the transition to the next stop.
    pub fn stop_with(mut self, stop: Stop) -> Self {
        let Stop {
            color,
            position,
            position2,
            easing,
        } = stop;
        if let Some(end) = position2 {
            self.entries.push(Entry {
                kind: EntryKind::Stop { color, easing: None },
                position,
            });
            self.entries.push(Entry {
                kind: EntryKind::Stop { color, easing },
                position: Some(end),
            });
        } else {
            self.entries.push(Entry {
                kind: EntryKind::Stop { color, easing },
                position,
            });
        }
        self
    }

    /// Add a hint: the position where the stops on either side mix evenly.
    #[inline]
    pub fn hint(mut self, position: f32) -> Self {
        self.entries.push(Entry {
            kind: EntryKind::Hint,
            position: Some(position),
        });
        self
    }

    /// Resolve the stops into an interpolator.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidStopConfiguration`] when there are fewer than two
    /// stops, or a hint is first, last or next to another hint.
    pub fn build(&self) -> Result<Interpolator, ColorError> {
        validate(&self.entries)?;

        let entries = fix_endpoints(self.entries.clone());
        let entries = fix_monotonic(entries);
        let placed = fix_order(fix_missing_positions(entries));
        let knots = resolve_hints(
            &placed,
            &self.space,
            self.premultiply_alpha,
            self.hue_adjustment,
        );

        let components = self.space.components();
        let mut baked: Vec<Vec<f32>> = knots.iter().map(|k| self.bake(&k.color)).collect();
        for (i, _) in components.iter().enumerate().filter(|(_, c)| c.is_polar) {
            let mut hues: Vec<f32> = baked.iter().map(|values| values[i]).collect();
            self.hue_adjustment.apply(&mut hues);
            for (values, hue) in baked.iter_mut().zip(hues) {
                values[i] = hue;
            }
        }

        let channels = (0..components.len())
            .map(|i| {
                let points = knots
                    .iter()
                    .zip(&baked)
                    .map(|(knot, values)| Point {
                        x: knot.position,
                        y: values[i],
                    })
                    .collect();
                self.method.build(points)
            })
            .collect();

        tracing::debug!(
            stops = knots.len(),
            space = %self.space,
            method = ?self.method,
            "Built interpolator"
        );

        Ok(Interpolator {
            space: self.space,
            positions: knots.iter().map(|k| k.position).collect(),
            easings: knots.iter().map(|k| k.easing).collect(),
            channels,
            easing: self.easing,
            premultiply_alpha: self.premultiply_alpha,
        })
    }

    fn bake(&self, color: &Color) -> Vec<f32> {
        let mut values = self.space.convert(color).to_array();
        if self.premultiply_alpha {
            multiply_alpha_in_place(self.space.components(), &mut values);
        }
        values
    }
}

fn validate(entries: &[Entry]) -> Result<(), ColorError> {
    if entries.iter().filter(|e| !e.is_hint()).count() < 2 {
        return Err(ColorError::InvalidStopConfiguration(
            "at least two color stops are required",
        ));
    }
    if entries.first().is_some_and(Entry::is_hint) {
        return Err(ColorError::InvalidStopConfiguration(
            "the first entry must be a color stop",
        ));
    }
    if entries.last().is_some_and(Entry::is_hint) {
        return Err(ColorError::InvalidStopConfiguration(
            "the last entry must be a color stop",
        ));
    }
    if entries.windows(2).any(|w| w[0].is_hint() && w[1].is_hint()) {
        return Err(ColorError::InvalidStopConfiguration(
            "hints must be separated by color stops",
        ));
    }
    Ok(())
}

fn fix_endpoints(mut entries: Vec<Entry>) -> Vec<Entry> {
    if let Some(first) = entries.first_mut() {
        first.position.get_or_insert(0.0);
    }
    if let Some(last) = entries.last_mut() {
        last.position.get_or_insert(1.0);
    }
    entries
}

fn fix_monotonic(mut entries: Vec<Entry>) -> Vec<Entry> {
    let mut max = f32::NEG_INFINITY;
    for position in entries.iter_mut().filter_map(|e| e.position.as_mut()) {
        if *position < max {
            *position = max;
        } else {
            max = *position;
        }
    }
    entries
}

fn fix_missing_positions(entries: Vec<Entry>) -> Vec<Placed> {
    let mut placed = Vec::with_capacity(entries.len());
    // Entries since the last positioned stop
    let mut pending: Vec<Entry> = Vec::new();
    let mut from = 0.0;

    for entry in entries {
        let (EntryKind::Stop { .. }, Some(to)) = (entry.kind, entry.position) else {
            pending.push(entry);
            continue;
        };
        let slots = pending.iter().filter(|e| e.position.is_none()).count() + 1;
        let mut slot = 0;
        for e in pending.drain(..) {
            let position = e.position.unwrap_or_else(|| {
                slot += 1;
                from + (to - from) * slot as f32 / slots as f32
            });
            placed.push(Placed {
                kind: e.kind,
                position,
            });
        }
        placed.push(Placed {
            kind: entry.kind,
            position: to,
        });
        from = to;
    }

    placed.extend(pending.into_iter().map(|e| Placed {
        kind: e.kind,
        position: e.position.unwrap_or(from),
    }));
    placed
}

/// Raise every position to the running maximum.
fn fix_order(mut placed: Vec<Placed>) -> Vec<Placed> {
    let mut max = f32::NEG_INFINITY;
    for entry in &mut placed {
        if entry.position < max {
            entry.position = max;
        } else {
            max = entry.position;
        }
    }
    placed
}

fn resolve_hints(
    placed: &[Placed],
    space: &ColorSpace,
    premultiply_alpha: bool,
    hue_adjustment: HueAdjustment,
) -> Vec<Knot> {
    let color_at = |i: Option<usize>| match i.and_then(|i| placed.get(i)).map(|p| p.kind) {
        Some(EntryKind::Stop { color, .. }) => Some(color),
        _ => None,
    };

    let mut knots = Vec::with_capacity(placed.len());
    for (i, entry) in placed.iter().enumerate() {
        match entry.kind {
            EntryKind::Stop { color, easing } => knots.push(Knot {
                color,
                position: entry.position,
                easing,
            }),
            EntryKind::Hint => {
                let (Some(left), Some(right)) = (color_at(i.checked_sub(1)), color_at(Some(i + 1)))
                else {
                    continue;
                };
                // Coincides with the stop before it, which must stay reachable
                if placed[i - 1].position == entry.position {
                    tracing::trace!(position = entry.position, "Dropped collapsed hint");
                    continue;
                }
                let color =
                    space
                        .convert(&left)
                        .interpolate(&right, 0.5, premultiply_alpha, hue_adjustment);
                tracing::trace!(position = entry.position, "Resolved hint");
                knots.push(Knot {
                    color,
                    position: entry.position,
                    easing: None,
                });
            }
        }
    }
    knots
}

/// A built gradient.
///
/// Lookups are total: positions before the first stop return the first
/// stop's color and positions after the last return the last.
#[derive(Debug, Clone)]
pub struct Interpolator {
    space: ColorSpace,
    positions: Vec<f32>,
    easings: Vec<Option<Easing>>,
    channels: Vec<ChannelInterpolator>,
    easing: Easing,
    premultiply_alpha: bool,
}

impl Interpolator {
    /// The space colors are interpolated and returned in.
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Final stop positions, including stops made from hints.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Sample the gradient at `position`.
    pub fn interpolate(&self, position: f32) -> Color {
        let t = self.easing.ease(position);
        let (Some(&first), Some(&last)) = (self.positions.first(), self.positions.last()) else {
            return self.space.build(&[]);
        };
        let t = self.ease_segment(t.max(first).min(last));

        let components = self.space.components();
        let mut values: Vec<f32> = self.channels.iter().map(|c| c.interpolate(t)).collect();
        for (value, info) in values.iter_mut().zip(components) {
            if info.is_polar {
                *value = normalize_deg(*value);
            }
        }
        if self.premultiply_alpha {
            divide_alpha_in_place(components, &mut values);
        }
        self.space.build(&values)
    }

    /// `length` evenly spaced samples from `0` to `1` inclusive.
    ///
    /// The iterator borrows the interpolator and can be cloned to restart.
    ///
    /// ```
    /// use huebox_color::{ColorSpace, Rgb};
    ///
    /// let gradient = ColorSpace::srgb()
    ///     .interpolator()
    ///     .stop(Rgb::from_u8(0, 0, 0))
    ///     .stop(Rgb::from_u8(0x88, 0x88, 0x88))
    ///     .build()
    ///     .unwrap();
    /// let hex: Vec<String> = gradient
    ///     .sequence(3)
    ///     .unwrap()
    ///     .map(|c| c.to_srgb().to_hex())
    ///     .collect();
    /// assert_eq!(hex, ["#000000", "#444444", "#888888"]);
    /// ```
    pub fn sequence(
        &self,
        length: usize,
    ) -> Result<impl Iterator<Item = Color> + Clone + '_, ColorError> {
        if length < 2 {
            return Err(ColorError::InvalidSequenceLength(length));
        }
        let last = (length - 1) as f32;
        Ok((0..length).map(move |i| self.interpolate(i as f32 / last)))
    }

    /// Apply the easing of the stop that starts the segment around `t`.
    fn ease_segment(&self, t: f32) -> f32 {
        let Some(i) = self.positions.iter().rposition(|&p| p <= t) else {
            return t;
        };
        let (Some(Some(easing)), Some(&end)) = (self.easings.get(i), self.positions.get(i + 1))
        else {
            return t;
        };
        let start = self.positions[i];
        let width = end - start;
        if width <= 0.0 {
            return t;
        }
        start + easing.ease((t - start) / width) * width
    }
}

impl ColorSpace {
    /// Start building a gradient in this space.
    #[inline]
    pub fn interpolator(&self) -> InterpolatorBuilder {
        InterpolatorBuilder::new(*self)
    }
}
