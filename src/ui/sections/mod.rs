// SPDX-License-Identifier: MPL-2.0
//! Page sections and the scroll geometry that ties them together.
//!
//! Every section is drawn at a fixed nominal height, so the position of each
//! one on the page is known without measuring widgets. Scroll-spy, reveals
//! and "scroll to section" are plain arithmetic on [`PageLayout`].

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::content::Portfolio;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::motion::{CardKey, HoverAnimator, Motion, RevealTracker, RevealVisual};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, text, Column, Container, Space};
use iced::{Element, Length, Padding};
use std::time::Instant;

/// Sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// Anchor name used by navigation links.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "work",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    /// Looks a section up by anchor.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }

    /// Translation key of the navbar link; the hero has none.
    #[must_use]
    pub fn nav_key(self) -> Option<&'static str> {
        match self {
            SectionId::Hero => None,
            SectionId::About => Some("nav-about"),
            SectionId::Experience => Some("nav-work"),
            SectionId::Projects => Some("nav-projects"),
            SectionId::Skills => Some("nav-skills"),
            SectionId::Testimonials => Some("nav-testimonials"),
            SectionId::Contact => Some("nav-contact"),
        }
    }

    /// Number of staggered reveal items drawn by the section.
    #[must_use]
    pub fn reveal_items(self, portfolio: &Portfolio) -> usize {
        match self {
            SectionId::Hero => hero::ITEMS,
            SectionId::About => about::items(portfolio),
            SectionId::Experience => experience::items(portfolio),
            SectionId::Projects => projects::items(portfolio),
            SectionId::Skills => skills::items(portfolio),
            SectionId::Testimonials => crate::ui::carousel::view::ITEMS,
            SectionId::Contact => contact::ITEMS,
        }
    }

    /// Height the section is drawn at.
    #[must_use]
    pub fn nominal_height(self) -> f32 {
        match self {
            SectionId::Hero => 720.0,
            SectionId::About => 820.0,
            SectionId::Experience => 1480.0,
            SectionId::Projects => 880.0,
            SectionId::Skills => 860.0,
            SectionId::Testimonials => 760.0,
            SectionId::Contact => 980.0,
        }
    }
}

/// Vertical placement of every section on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    tops: Vec<(SectionId, f32, f32)>,
    total: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(SectionId::ALL.iter().map(|id| (*id, id.nominal_height())))
    }
}

impl PageLayout {
    /// Builds a layout from `(section, height)` pairs in page order.
    pub fn new(sections: impl IntoIterator<Item = (SectionId, f32)>) -> Self {
        let mut tops = Vec::new();
        let mut y = 0.0;
        for (id, height) in sections {
            tops.push((id, y, height.max(0.0)));
            y += height.max(0.0);
        }
        Self { tops, total: y }
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total
    }

    /// Top edge of `id`.
    #[must_use]
    pub fn top(&self, id: SectionId) -> Option<f32> {
        self.tops
            .iter()
            .find(|(section, _, _)| *section == id)
            .map(|(_, top, _)| *top)
    }

    /// Section under the reading line, just below the navbar.
    #[must_use]
    pub fn section_at(&self, offset_y: f32) -> Option<SectionId> {
        let line = offset_y.max(0.0) + sizing::NAVBAR_HEIGHT;
        self.tops
            .iter()
            .find(|(_, top, height)| line >= *top && line < top + height)
            .or_else(|| self.tops.last().filter(|(_, top, _)| line >= *top))
            .map(|(id, _, _)| *id)
    }

    /// Fraction of `id` currently inside the viewport.
    #[must_use]
    pub fn visible_fraction(&self, id: SectionId, offset_y: f32, viewport_height: f32) -> f32 {
        let Some((_, top, height)) = self.tops.iter().find(|(section, _, _)| *section == id) else {
            return 0.0;
        };
        if *height <= 0.0 {
            return 0.0;
        }
        let view_top = offset_y;
        let view_bottom = offset_y + viewport_height.max(0.0);
        let visible = (view_bottom.min(top + height) - view_top.max(*top)).max(0.0);
        (visible / height).clamp(0.0, 1.0)
    }

    /// Relative scroll position (0 to 1) that brings `id` to the top.
    ///
    /// `content_height` is the measured height of the scrolled content, which
    /// includes anything drawn around the sections.
    #[must_use]
    pub fn relative_offset(&self, id: SectionId, content_height: f32, viewport_height: f32) -> f32 {
        let scrollable = content_height - viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        self.top(id)
            .map_or(0.0, |top| (top / scrollable).clamp(0.0, 1.0))
    }
}

/// Messages emitted by section views.
#[derive(Debug, Clone)]
pub enum Message {
    Hover(CardKey, bool),
    Navigate(SectionId),
    Contact(contact::Message),
}

/// Contextual data needed to render a section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub portfolio: &'a Portfolio,
    pub colors: ColorScheme,
    pub reveals: &'a RevealTracker<SectionId>,
    pub hover: &'a HoverAnimator,
    pub motion: &'a Motion,
    pub now: Instant,
}

impl ViewContext<'_> {
    /// Reveal visual of the `item`-th element of `section`.
    #[must_use]
    pub fn reveal(&self, section: SectionId, item: usize) -> RevealVisual {
        self.reveals.item_visual(section, item, self.now, self.motion)
    }
}

/// Kicker and heading shared by every section but the hero.
pub fn heading<'a, M: 'a>(
    ctx: &ViewContext<'a>,
    section: SectionId,
    sub_key: &str,
    title_key: &str,
) -> Element<'a, M> {
    let visual = ctx.reveal(section, 0);
    let sub = text(ctx.i18n.tr(sub_key).to_uppercase())
        .size(typography::KICKER)
        .color(faded(ctx.colors.text_secondary, visual.opacity));
    let title = text(ctx.i18n.tr(title_key))
        .size(typography::TITLE_LG)
        .color(faded(ctx.colors.text_primary, visual.opacity));

    revealed(
        Column::new().spacing(spacing::XS).push(sub).push(title),
        visual,
    )
}

/// Offsets `content` down by the reveal's remaining travel.
pub fn revealed<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    visual: RevealVisual,
) -> Element<'a, M> {
    Container::new(content)
        .padding(Padding {
            top: visual.offset,
            ..Padding::ZERO
        })
        .into()
}

/// `color` with its alpha multiplied by `opacity`.
#[must_use]
pub fn faded(color: iced::Color, opacity: f32) -> iced::Color {
    iced::Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Wraps a section body in its fixed-height, centered frame.
pub fn frame<'a, M: 'a>(section: SectionId, body: impl Into<Element<'a, M>>) -> Element<'a, M> {
    let inner = Container::new(body)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill);

    container(Column::new().push(inner).push(Space::new().height(Length::Fill)))
        .width(Length::Fill)
        .height(Length::Fixed(section.nominal_height()))
        .padding([spacing::SECTION, spacing::XXL])
        .center_x(Length::Fill)
        .clip(true)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::motion::MotionSettings;

    #[test]
    fn every_section_view_builds_from_embedded_content() {
        let portfolio = Portfolio::embedded().expect("embedded content should parse");
        let i18n = I18n::new(Some("en-US".into()), None, &Config::default());
        let reveals = RevealTracker::new();
        let hover = HoverAnimator::new();
        let motion = Motion::init(MotionSettings::default());
        let contact_state = contact::State::default();
        let ctx = ViewContext {
            i18n: &i18n,
            portfolio: &portfolio,
            colors: ColorScheme::dark(),
            reveals: &reveals,
            hover: &hover,
            motion: &motion,
            now: Instant::now(),
        };

        let _ = hero::view(&ctx);
        let _ = about::view(&ctx);
        let _ = experience::view(&ctx);
        let _ = projects::view(&ctx);
        let _ = skills::view(&ctx);
        let _ = contact::view(&ctx, &contact_state);
    }

    #[test]
    fn anchors_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        assert_eq!(SectionId::Experience.anchor(), "work");
        assert_eq!(SectionId::from_anchor("blog"), None);
    }

    #[test]
    fn reveal_items_follow_content() {
        let portfolio = Portfolio::default();
        assert_eq!(
            SectionId::About.reveal_items(&portfolio),
            2 + portfolio.services.len()
        );
        assert_eq!(SectionId::Hero.reveal_items(&portfolio), hero::ITEMS);
    }

    #[test]
    fn sections_stack_in_order() {
        let layout = PageLayout::default();
        let mut previous = -1.0;
        for id in SectionId::ALL {
            let top = layout.top(id).expect("every section is laid out");
            assert!(top > previous);
            previous = top;
        }
        let sum: f32 = SectionId::ALL.iter().map(|id| id.nominal_height()).sum();
        assert_eq!(layout.total_height(), sum);
    }

    #[test]
    fn section_at_uses_reading_line_below_navbar() {
        let layout = PageLayout::default();
        assert_eq!(layout.section_at(0.0), Some(SectionId::Hero));

        let about = layout.top(SectionId::About).unwrap();
        assert_eq!(
            layout.section_at(about - sizing::NAVBAR_HEIGHT),
            Some(SectionId::About)
        );
        assert_eq!(
            layout.section_at(about - sizing::NAVBAR_HEIGHT - 1.0),
            Some(SectionId::Hero)
        );
        assert_eq!(layout.section_at(1e9), Some(SectionId::Contact));
    }

    #[test]
    fn visible_fraction_tracks_overlap() {
        let layout = PageLayout::new([(SectionId::Hero, 100.0), (SectionId::About, 400.0)]);

        assert_eq!(layout.visible_fraction(SectionId::Hero, 0.0, 200.0), 1.0);
        assert_eq!(layout.visible_fraction(SectionId::About, 0.0, 200.0), 0.25);
        assert_eq!(layout.visible_fraction(SectionId::About, 0.0, 100.0), 0.0);
        assert_eq!(layout.visible_fraction(SectionId::Hero, 150.0, 200.0), 0.0);
        assert_eq!(layout.visible_fraction(SectionId::Contact, 0.0, 200.0), 0.0);
    }

    #[test]
    fn relative_offset_maps_top_to_scroll_range() {
        let layout = PageLayout::new([(SectionId::Hero, 500.0), (SectionId::About, 500.0)]);
        assert_eq!(layout.relative_offset(SectionId::Hero, 1000.0, 500.0), 0.0);
        assert_eq!(layout.relative_offset(SectionId::About, 1000.0, 500.0), 1.0);
        assert_eq!(layout.relative_offset(SectionId::About, 1500.0, 500.0), 0.5);
        assert_eq!(layout.relative_offset(SectionId::About, 400.0, 500.0), 0.0);
    }
}
