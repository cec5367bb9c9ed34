//! Ramer–Douglas–Peucker polyline simplification with an explicit work stack.
//!
//! Depth is bounded by the number of input points rather than the call
//! stack, so a dense or perfectly linear input cannot recurse deeply.

/// Distance from `p` to the infinite line through `a` and `b`.
/// Falls back to the distance to `a` when `a == b`.
pub fn perpendicular_distance(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-12 {
        let ex = p.0 - a.0;
        let ey = p.1 - a.1;
        return (ex * ex + ey * ey).sqrt();
    }
    (dy * p.0 - dx * p.1 + b.0 * a.1 - b.1 * a.0).abs() / len
}

/// Indices (ascending) of the points kept by RDP with `tolerance`.
///
/// First and last points are always kept. A point is kept when it lies
/// strictly farther than `tolerance` from the chord of its segment.
pub fn simplify_indices(points: &[(f64, f64)], tolerance: f64) -> Vec<usize> {
    let n = points.len();
    if n < 3 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(64);
    stack.push((0, n - 1));

    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let a = points[start];
        let b = points[end];
        let mut max_dist = 0.0;
        let mut max_idx = start;
        for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
            let d = perpendicular_distance(p, a, b);
            if d > max_dist {
                max_dist = d;
                max_idx = i;
            }
        }
        if max_dist > tolerance {
            keep[max_idx] = true;
            stack.push((start, max_idx));
            stack.push((max_idx, end));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, k)| k.then_some(i))
        .collect()
}

/// Simplified copy of `points`.
pub fn simplify(points: &[(f64, f64)], tolerance: f64) -> Vec<(f64, f64)> {
    simplify_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perpendicular_distance_basics() {
        let d = perpendicular_distance((0.5, 1.0), (0.0, 0.0), (1.0, 0.0));
        assert!((d - 1.0).abs() < 1e-12);
        let on = perpendicular_distance((0.25, 0.25), (0.0, 0.0), (1.0, 1.0));
        assert!(on < 1e-12);
        let degenerate = perpendicular_distance((3.0, 4.0), (0.0, 0.0), (0.0, 0.0));
        assert!((degenerate - 5.0).abs() < 1e-12);
    }

    #[test]
    fn straight_line_collapses_to_endpoints() {
        let pts: Vec<(f64, f64)> = (0..10_000).map(|i| (i as f64, 2.0 * i as f64)).collect();
        assert_eq!(simplify_indices(&pts, 1e-6), vec![0, 9_999]);
    }

    #[test]
    fn short_inputs_pass_through() {
        assert!(simplify(&[], 0.1).is_empty());
        assert_eq!(simplify(&[(0.0, 0.0)], 0.1), vec![(0.0, 0.0)]);
        assert_eq!(simplify(&[(0.0, 0.0), (1.0, 1.0)], 0.1).len(), 2);
    }

    #[test]
    fn discarded_points_lie_within_tolerance_of_their_kept_neighbours() {
        let pts: Vec<(f64, f64)> = (0..=500)
            .map(|i| {
                let t = i as f64 / 500.0;
                (t, (t * 12.0).sin() * (1.0 - t))
            })
            .collect();
        let tol = 0.01;
        let kept = simplify_indices(&pts, tol);
        assert!(kept.len() > 2 && kept.len() < pts.len());
        for w in kept.windows(2) {
            let (a, b) = (pts[w[0]], pts[w[1]]);
            for p in &pts[w[0] + 1..w[1]] {
                assert!(perpendicular_distance(*p, a, b) <= tol);
            }
        }
    }

    #[test]
    fn corner_is_kept() {
        let pts = [(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0)];
        assert_eq!(simplify_indices(&pts, 0.1), vec![0, 2, 3]);
    }
}
