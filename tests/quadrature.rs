use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_abs_diff_eq;
use rstest::rstest;

use snquad::gauss::gauss_legendre;
use snquad::{Quadrature, QuadratureError, SUPPORTED_ORDERS};

#[rstest]
#[case(2)]
#[case(4)]
#[case(6)]
#[case(8)]
#[case(10)]
#[case(12)]
#[case(14)]
#[case(16)]
#[case(18)]
#[case(20)]
#[case(22)]
#[case(24)]
#[case(26)]
#[case(28)]
#[case(30)]
fn angle_count(#[case] order: usize) {
    let quadrature = Quadrature::new(order).unwrap();
    assert_eq!(quadrature.num_angles(), 2 * order * order);
    assert_eq!(quadrature.directions().count(), 2 * order * order);
}

#[test]
fn directions_are_unit_vectors() {
    for order in SUPPORTED_ORDERS {
        let quadrature = Quadrature::new(order).unwrap();
        for angle in 0..quadrature.num_angles() {
            let [xi, eta, mu] = quadrature.omega(angle).unwrap();
            assert_abs_diff_eq!(xi * xi + eta * eta + mu * mu, 1.0, epsilon = 1e-12);
        }
        assert!(quadrature.max_norm_error() < 1e-12);
    }
}

#[test]
fn weights_cover_the_sphere() {
    for order in SUPPORTED_ORDERS {
        let quadrature = Quadrature::new(order).unwrap();
        let total: f64 = (0..quadrature.num_angles())
            .map(|angle| quadrature.weight(angle).unwrap())
            .sum();
        assert_abs_diff_eq!(total, 4.0 * PI, epsilon = 1e-10);
        assert_abs_diff_eq!(quadrature.weight_sum(), 4.0 * PI, epsilon = 1e-10);
    }
}

#[test]
fn second_moments_are_isotropic() {
    // integral of each squared direction cosine over the sphere is 4pi/3
    for order in SUPPORTED_ORDERS {
        let quadrature = Quadrature::new(order).unwrap();
        let (mut xx, mut yy, mut zz) = (0.0, 0.0, 0.0);
        for d in quadrature.directions() {
            xx += d.w * d.xi * d.xi;
            yy += d.w * d.eta * d.eta;
            zz += d.w * d.mu * d.mu;
        }
        assert_abs_diff_eq!(xx, 4.0 * PI / 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(yy, 4.0 * PI / 3.0, epsilon = 1e-10);
        assert_abs_diff_eq!(zz, 4.0 * PI / 3.0, epsilon = 1e-10);
    }
}

#[test]
fn mu_is_the_table_node() {
    for order in SUPPORTED_ORDERS {
        let quadrature = Quadrature::new(order).unwrap();
        let rule = gauss_legendre(order).unwrap();
        let sectors = 2 * order;
        for (level, node) in rule.nodes.iter().enumerate() {
            for sector in 0..sectors {
                let mu = quadrature.mu(level * sectors + sector).unwrap();
                assert_eq!(mu.to_bits(), node.to_bits());
            }
        }
    }
}

#[test]
fn ordering_is_level_major() {
    let order = 6;
    let quadrature = Quadrature::new(order).unwrap();
    let rule = gauss_legendre(order).unwrap();
    let sectors = 2 * order;
    let width = 2.0 * PI / sectors as f64;

    for level in 0..order {
        for sector in 0..sectors {
            let angle = level * sectors + sector;
            let d = quadrature.direction(angle).unwrap();
            let phi = d.eta.atan2(d.xi).rem_euclid(2.0 * PI);
            assert_abs_diff_eq!(phi, width * (sector as f64 + 0.5), epsilon = 1e-12);
            assert_abs_diff_eq!(d.w, rule.weights[level] * width, epsilon = 1e-15);
        }
    }
}

#[test]
fn polar_reflection_symmetry() {
    for order in SUPPORTED_ORDERS {
        let quadrature = Quadrature::new(order).unwrap();
        let sectors = 2 * order;
        for level in 0..order {
            let mirror = order - 1 - level;
            for sector in 0..sectors {
                let a = quadrature.direction(level * sectors + sector).unwrap();
                let b = quadrature.direction(mirror * sectors + sector).unwrap();
                assert_eq!(a.mu, -b.mu);
                assert_eq!(a.xi, b.xi);
                assert_eq!(a.eta, b.eta);
                assert_eq!(a.w, b.w);
            }
        }
    }
}

#[test]
fn azimuthal_reflection_symmetry() {
    let order = 8;
    let quadrature = Quadrature::new(order).unwrap();
    let sectors = 2 * order;
    for level in 0..order {
        for sector in 0..sectors {
            let a = quadrature.direction(level * sectors + sector).unwrap();
            let b = quadrature
                .direction(level * sectors + sectors - 1 - sector)
                .unwrap();
            assert_abs_diff_eq!(a.xi, b.xi, epsilon = 1e-12);
            assert_abs_diff_eq!(a.eta, -b.eta, epsilon = 1e-12);
            assert_eq!(a.w, b.w);
        }
    }
}

#[test]
fn weight_multiset_is_symmetric() {
    let quadrature = Quadrature::new(10).unwrap();
    let mut weights = quadrature.weight_values().to_vec();
    let mut reversed: Vec<f64> = weights.iter().rev().copied().collect();
    weights.sort_by(f64::total_cmp);
    reversed.sort_by(f64::total_cmp);
    assert_eq!(weights, reversed);

    // reversed angle order mirrors both polar level and sector
    let w = quadrature.weight_values();
    for (a, b) in w.iter().zip(w.iter().rev()) {
        assert_eq!(a, b);
    }
}

#[test]
fn order_two_reference_values() {
    let quadrature = Quadrature::new(2).unwrap();
    assert_eq!(quadrature.num_angles(), 8);

    assert_abs_diff_eq!(quadrature.xi(0).unwrap(), 0.5774, epsilon = 1e-4);
    assert_abs_diff_eq!(quadrature.eta(0).unwrap(), 0.5774, epsilon = 1e-4);
    assert_abs_diff_eq!(quadrature.mu(0).unwrap(), -0.5774, epsilon = 1e-4);
    assert_abs_diff_eq!(quadrature.weight(0).unwrap(), FRAC_PI_2, epsilon = 1e-4);

    let radius = (1.0_f64 - 1.0 / 3.0).sqrt();
    assert_abs_diff_eq!(
        quadrature.xi(0).unwrap(),
        radius * (PI / 4.0).cos(),
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        quadrature.eta(0).unwrap(),
        radius * (PI / 4.0).sin(),
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        quadrature.mu(0).unwrap(),
        -0.5773502691896257,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(quadrature.weight(0).unwrap(), PI / 2.0, epsilon = 1e-6);

    // last angle is the top level in the last sector
    let [xi, eta, mu] = quadrature.omega(7).unwrap();
    assert_abs_diff_eq!(xi, 0.5773502691896257, epsilon = 1e-6);
    assert_abs_diff_eq!(eta, -0.5773502691896257, epsilon = 1e-6);
    assert_abs_diff_eq!(mu, 0.5773502691896257, epsilon = 1e-6);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(5)]
#[case(31)]
#[case(32)]
#[case(64)]
fn unsupported_orders_fail(#[case] order: usize) {
    assert_eq!(
        Quadrature::new(order),
        Err(QuadratureError::UnsupportedOrder(order))
    );
}

#[test]
fn unsupported_order_message_names_the_value() {
    let error = Quadrature::new(3).unwrap_err();
    assert!(error.to_string().contains("order 3 not supported"));
}

#[rstest]
#[case(2)]
#[case(12)]
#[case(30)]
fn out_of_range_accessors_fail(#[case] order: usize) {
    let quadrature = Quadrature::new(order).unwrap();
    let n = quadrature.num_angles();
    let expected = QuadratureError::IndexOutOfRange {
        index: n,
        num_angles: n,
    };

    assert_eq!(quadrature.xi(n), Err(expected));
    assert_eq!(quadrature.eta(n), Err(expected));
    assert_eq!(quadrature.mu(n), Err(expected));
    assert_eq!(quadrature.weight(n), Err(expected));
    assert_eq!(quadrature.omega(n), Err(expected));

    // the last valid index still works
    assert!(quadrature.omega(n - 1).is_ok());
    assert!(quadrature.weight(usize::MAX).is_err());
}

#[test]
fn shared_across_threads() {
    let quadrature = std::sync::Arc::new(Quadrature::new(4).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let quadrature = std::sync::Arc::clone(&quadrature);
            std::thread::spawn(move || quadrature.weight_sum())
        })
        .collect();

    for handle in handles {
        assert_abs_diff_eq!(handle.join().unwrap(), 4.0 * PI, epsilon = 1e-10);
    }
}
