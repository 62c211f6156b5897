//! 合成 KPI 时序
//!
//! 不是真实历史：每个采样点都是当前总量加随机抖动伪造出来的。

use std::sync::Arc;

use chrono::{Duration, Utc};
use supplyline_common::{KpiPoint, KpiRange};

use super::jitter::JitterSource;

/// KPI 时序生成器
pub struct KpiGenerator {
    jitter: Arc<dyn JitterSource>,
}

impl KpiGenerator {
    pub fn new(jitter: Arc<dyn JitterSource>) -> Self {
        Self { jitter }
    }

    /// 生成窗口内的逐日采样，最早的一天在前，最后一天是今天
    pub fn series(&self, range: KpiRange, total_stock: i64, total_demand: i64) -> Vec<KpiPoint> {
        let today = Utc::now().date_naive();

        (0..range.days())
            .rev()
            .map(|offset| {
                // 同一天的库存与需求共用一次抖动
                let variation = self.jitter.sample();
                KpiPoint {
                    date: today - Duration::days(offset),
                    stock: jittered(total_stock, variation),
                    demand: jittered(total_demand, variation),
                }
            })
            .collect()
    }
}

fn jittered(total: i64, variation: f64) -> i64 {
    (total as f64 * (1.0 + variation)).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::kpi::FixedJitter;

    fn generator(variation: f64) -> KpiGenerator {
        KpiGenerator::new(Arc::new(FixedJitter(variation)))
    }

    #[test]
    fn test_series_length_per_range() {
        let g = generator(0.0);
        assert_eq!(g.series(KpiRange::Week, 334, 400).len(), 7);
        assert_eq!(g.series(KpiRange::Fortnight, 334, 400).len(), 14);
        assert_eq!(g.series(KpiRange::Month, 334, 400).len(), 30);
    }

    #[test]
    fn test_series_is_oldest_first_and_ends_today() {
        let g = generator(0.0);
        let series = g.series(KpiRange::Week, 334, 400);
        let today = Utc::now().date_naive();

        assert_eq!(series.last().unwrap().date, today);
        assert_eq!(series.first().unwrap().date, today - Duration::days(6));
        for window in series.windows(2) {
            assert_eq!(window[1].date, window[0].date + Duration::days(1));
        }
    }

    #[test]
    fn test_zero_jitter_reproduces_totals() {
        let g = generator(0.0);
        for point in g.series(KpiRange::Week, 334, 400) {
            assert_eq!(point.stock, 334);
            assert_eq!(point.demand, 400);
        }
    }

    #[test]
    fn test_jitter_floors_toward_zero() {
        let g = generator(0.1);
        let point = &g.series(KpiRange::Week, 334, 400)[0];
        assert_eq!(point.stock, 367);
        assert_eq!(point.demand, 440);
    }
}
