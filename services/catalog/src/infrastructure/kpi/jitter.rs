//! 抖动源
//!
//! KPI 生成走可注入的抖动接口，生产环境用随机源，测试注入固定值。

use rand::Rng;

/// 抖动源接口
pub trait JitterSource: Send + Sync {
    /// 返回 [-0.1, 0.1) 内的抖动系数
    fn sample(&self) -> f64;
}

/// 随机抖动（生产环境）
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(-0.1..0.1)
    }
}

/// 固定抖动（测试用）
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_jitter_stays_in_band() {
        let jitter = ThreadRngJitter;
        for _ in 0..1000 {
            let v = jitter.sample();
            assert!((-0.1..0.1).contains(&v));
        }
    }

    #[test]
    fn test_fixed_jitter_is_constant() {
        let jitter = FixedJitter(0.05);
        assert_eq!(jitter.sample(), 0.05);
        assert_eq!(jitter.sample(), 0.05);
    }
}
