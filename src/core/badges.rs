use crate::models::{Badge, BadgeKind, LoggedAction, ProgressSnapshot};
use tracing::info;

/// Inputs a badge can be unlocked against.
#[derive(Debug, Clone, Copy)]
pub struct BadgeContext {
    pub total_actions: usize,
    pub positive_actions: usize,
    pub current_streak: u32,
    pub net_gain: i64,
    pub goal: i64,
}

impl BadgeContext {
    pub fn new(actions: &[LoggedAction], progress: &ProgressSnapshot, goal: i64) -> Self {
        Self {
            total_actions: actions.len(),
            positive_actions: actions.iter().filter(|a| a.is_positive()).count(),
            current_streak: progress.current_streak,
            net_gain: progress.net_gain,
            goal,
        }
    }
}

pub struct BadgeEngine;

impl BadgeEngine {
    pub fn qualifies(badge: &Badge, ctx: &BadgeContext) -> bool {
        match badge.kind {
            BadgeKind::Milestone => ctx.total_actions as f64 >= badge.requirement,
            BadgeKind::Streak => ctx.current_streak as f64 >= badge.requirement,
            BadgeKind::Savings => {
                ctx.goal > 0 && ctx.net_gain as f64 / ctx.goal as f64 >= badge.requirement
            }
            BadgeKind::Actions => ctx.positive_actions as f64 >= badge.requirement,
        }
    }

    /// Re-evaluate every badge. Flags only ever go from false to true; the
    /// badges that flipped in this pass are returned.
    pub fn evaluate(badges: &mut [Badge], ctx: &BadgeContext) -> Vec<Badge> {
        let mut newly_earned = Vec::new();

        for badge in badges.iter_mut() {
            let was_earned = badge.earned;
            badge.earned = badge.earned || Self::qualifies(badge, ctx);

            if !was_earned && badge.earned {
                info!(badge = %badge.id, "badge earned");
                newly_earned.push(badge.clone());
            }
        }

        newly_earned
    }
}
