//! One-shot measurement of the drop zone rectangles.

use std::fmt;

use tracing::info;

use super::geometry::ZoneGeometry;

/// Identifies one of the two drop zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneId {
    Zone1,
    Zone2,
}

impl ZoneId {
    /// Both zones in display order.
    pub const ALL: [ZoneId; 2] = [ZoneId::Zone1, ZoneId::Zone2];

    pub fn index(self) -> usize {
        match self {
            ZoneId::Zone1 => 0,
            ZoneId::Zone2 => 1,
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Zone1 => write!(f, "zone 1"),
            ZoneId::Zone2 => write!(f, "zone 2"),
        }
    }
}

/// Zone rectangles captured after the first layout. Never updated afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredZones {
    pub zone1: ZoneGeometry,
    pub zone2: ZoneGeometry,
}

impl MeasuredZones {
    pub fn new(zone1: ZoneGeometry, zone2: ZoneGeometry) -> Self {
        Self { zone1, zone2 }
    }

    pub fn get(&self, zone: ZoneId) -> ZoneGeometry {
        match zone {
            ZoneId::Zone1 => self.zone1,
            ZoneId::Zone2 => self.zone2,
        }
    }
}

/// Collects zone rectangles during the first laid-out frame and seals them.
///
/// Once sealed, observations are ignored: resizing or moving the window
/// leaves hit-testing against the original rectangles.
#[derive(Clone, Debug, Default)]
pub struct LayoutProbe {
    pending: [Option<ZoneGeometry>; 2],
    measured: Option<MeasuredZones>,
}

impl LayoutProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a zone rectangle for the current frame.
    pub fn observe(&mut self, zone: ZoneId, geometry: ZoneGeometry) {
        if self.measured.is_some() {
            return;
        }
        self.pending[zone.index()] = Some(geometry);
    }

    /// Seal the measurement once both zones have been observed.
    pub fn finish_frame(&mut self) -> Option<&MeasuredZones> {
        if self.measured.is_none()
            && let [Some(zone1), Some(zone2)] = self.pending
        {
            info!(
                "Drop zones measured: zone1={:?} zone2={:?}",
                zone1, zone2
            );
            self.measured = Some(MeasuredZones::new(zone1, zone2));
            self.pending = [None, None];
        }
        self.measured.as_ref()
    }

    pub fn measured(&self) -> Option<&MeasuredZones> {
        self.measured.as_ref()
    }

    pub fn is_measured(&self) -> bool {
        self.measured.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(left: f32) -> ZoneGeometry {
        ZoneGeometry::new(left, 0.0, 288.0, 172.0)
    }

    #[test]
    fn waits_for_both_zones() {
        let mut probe = LayoutProbe::new();
        probe.observe(ZoneId::Zone1, zone(240.0));
        assert!(probe.finish_frame().is_none());
        probe.observe(ZoneId::Zone2, zone(912.0));
        let measured = probe.finish_frame().copied().unwrap();
        assert_eq!(measured.get(ZoneId::Zone1), zone(240.0));
        assert_eq!(measured.get(ZoneId::Zone2), zone(912.0));
    }

    #[test]
    fn later_observations_do_not_remeasure() {
        let mut probe = LayoutProbe::new();
        probe.observe(ZoneId::Zone1, zone(240.0));
        probe.observe(ZoneId::Zone2, zone(912.0));
        probe.finish_frame();
        probe.observe(ZoneId::Zone1, zone(10.0));
        probe.observe(ZoneId::Zone2, zone(20.0));
        let measured = probe.finish_frame().copied().unwrap();
        assert_eq!(measured.zone1, zone(240.0));
        assert_eq!(measured.zone2, zone(912.0));
    }

    #[test]
    fn latest_observation_before_sealing_wins() {
        let mut probe = LayoutProbe::new();
        probe.observe(ZoneId::Zone1, zone(1.0));
        probe.observe(ZoneId::Zone1, zone(240.0));
        probe.observe(ZoneId::Zone2, zone(912.0));
        assert_eq!(probe.finish_frame().unwrap().zone1, zone(240.0));
    }
}
