//! Tabulated Gauss-Legendre rules for the polar dimension
//!
//! The polar cosine of every quadrature set is taken from a fixed table of
//! Gauss-Legendre nodes and weights on `[-1, 1]`. Nothing is computed at
//! runtime: the values are trusted, compiled-in constants for the even orders
//! 2 through 30.
//!
//! For every table:
//! - nodes are in ascending order and `node[i] == -node[order - 1 - i]`
//! - weights are positive, sum to 2.0, and `weight[i] == weight[order - 1 - i]`
//!
//! ```rust
//! # use snquad::gauss::gauss_legendre;
//! let rule = gauss_legendre(4).unwrap();
//! assert_eq!(rule.nodes.len(), 4);
//! assert_eq!(rule.weights.len(), 4);
//! ```
//!
//! Requesting anything outside of the table is an error rather than a best
//! guess, so the table is never extrapolated.
//!
//! ```rust
//! # use snquad::gauss::gauss_legendre;
//! # use snquad::error::QuadratureError;
//! assert_eq!(gauss_legendre(32), Err(QuadratureError::UnsupportedOrder(32)));
//! ```
#![allow(clippy::excessive_precision)]

// internal modules
use crate::error::{QuadratureError, Result};
use table::*;

/// Every SN order with tabulated Gauss-Legendre data, ascending
pub const SUPPORTED_ORDERS: [usize; 15] = [2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30];

/// A single tabulated Gauss-Legendre rule
///
/// The `nodes` and `weights` are paired by index and always have exactly
/// `order` entries.
#[derive(Debug, PartialEq)]
pub struct GaussLegendre {
    /// Number of points in the rule
    pub order: usize,
    /// Abscissas on `[-1, 1]` in ascending order
    pub nodes: &'static [f64],
    /// Weights paired with each node
    pub weights: &'static [f64],
}

impl GaussLegendre {
    /// Iterate over the `(node, weight)` pairs in ascending node order
    pub fn levels(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().copied().zip(self.weights.iter().copied())
    }
}

/// Look up the Gauss-Legendre rule for an SN order
///
/// Fails with [QuadratureError::UnsupportedOrder] for odd orders, zero, or
/// anything above 30.
pub fn gauss_legendre(order: usize) -> Result<&'static GaussLegendre> {
    TABLES
        .iter()
        .find(|rule| rule.order == order)
        .ok_or(QuadratureError::UnsupportedOrder(order))
}

/// Check if an order has tabulated data without building anything
///
/// ```rust
/// # use snquad::gauss::is_supported;
/// assert!(is_supported(8));
/// assert!(!is_supported(7));
/// ```
pub fn is_supported(order: usize) -> bool {
    SUPPORTED_ORDERS.contains(&order)
}

macro_rules! rule {
    ($order:literal, $nodes:ident, $weights:ident) => {
        GaussLegendre {
            order: $order,
            nodes: &$nodes,
            weights: &$weights,
        }
    };
}

static TABLES: [GaussLegendre; 15] = [
    rule!(2, NODES_2, WEIGHTS_2),
    rule!(4, NODES_4, WEIGHTS_4),
    rule!(6, NODES_6, WEIGHTS_6),
    rule!(8, NODES_8, WEIGHTS_8),
    rule!(10, NODES_10, WEIGHTS_10),
    rule!(12, NODES_12, WEIGHTS_12),
    rule!(14, NODES_14, WEIGHTS_14),
    rule!(16, NODES_16, WEIGHTS_16),
    rule!(18, NODES_18, WEIGHTS_18),
    rule!(20, NODES_20, WEIGHTS_20),
    rule!(22, NODES_22, WEIGHTS_22),
    rule!(24, NODES_24, WEIGHTS_24),
    rule!(26, NODES_26, WEIGHTS_26),
    rule!(28, NODES_28, WEIGHTS_28),
    rule!(30, NODES_30, WEIGHTS_30),
];

// Tabulated to 16 significant figures
#[rustfmt::skip]
mod table {
    pub(super) const NODES_2: [f64; 2] = [
        -0.5773502691896257, 0.5773502691896257,
    ];
    pub(super) const WEIGHTS_2: [f64; 2] = [
        1.0000000000000000, 1.0000000000000000,
    ];

    pub(super) const NODES_4: [f64; 4] = [
        -0.8611363115940526, -0.3399810435848563, 0.3399810435848563, 0.8611363115940526,
    ];
    pub(super) const WEIGHTS_4: [f64; 4] = [
        0.3478548451374540, 0.6521451548625462, 0.6521451548625462, 0.3478548451374540,
    ];

    pub(super) const NODES_6: [f64; 6] = [
        -0.9324695142031521, -0.6612093864662645, -0.2386191860831969, 0.2386191860831969,
        0.6612093864662645, 0.9324695142031521,
    ];
    pub(super) const WEIGHTS_6: [f64; 6] = [
        0.1713244923791694, 0.3607615730481388, 0.4679139345726918, 0.4679139345726918,
        0.3607615730481388, 0.1713244923791694,
    ];

    pub(super) const NODES_8: [f64; 8] = [
        -0.9602898564975362, -0.7966664774136267, -0.5255324099163290, -0.1834346424956498,
        0.1834346424956498, 0.5255324099163290, 0.7966664774136267, 0.9602898564975362,
    ];
    pub(super) const WEIGHTS_8: [f64; 8] = [
        0.1012285362903753, 0.2223810344533751, 0.3137066458778874, 0.3626837833783620,
        0.3626837833783620, 0.3137066458778874, 0.2223810344533751, 0.1012285362903753,
    ];

    pub(super) const NODES_10: [f64; 10] = [
        -0.9739065285171717, -0.8650633666889845, -0.6794095682990244, -0.4333953941292472,
        -0.1488743389816312, 0.1488743389816312, 0.4333953941292472, 0.6794095682990244,
        0.8650633666889845, 0.9739065285171717,
    ];
    pub(super) const WEIGHTS_10: [f64; 10] = [
        0.0666713443086850, 0.1494513491505808, 0.2190863625159831, 0.2692667193099972,
        0.2955242247147539, 0.2955242247147539, 0.2692667193099972, 0.2190863625159831,
        0.1494513491505808, 0.0666713443086850,
    ];

    pub(super) const NODES_12: [f64; 12] = [
        -0.9815606342467192, -0.9041172563704748, -0.7699026741943047, -0.5873179542866174,
        -0.3678314989981802, -0.1252334085114689, 0.1252334085114689, 0.3678314989981802,
        0.5873179542866174, 0.7699026741943047, 0.9041172563704748, 0.9815606342467192,
    ];
    pub(super) const WEIGHTS_12: [f64; 12] = [
        0.0471753363865124, 0.1069393259953184, 0.1600783285433459, 0.2031674267230659,
        0.2334925365383547, 0.2491470458134026, 0.2491470458134026, 0.2334925365383547,
        0.2031674267230659, 0.1600783285433459, 0.1069393259953184, 0.0471753363865124,
    ];

    pub(super) const NODES_14: [f64; 14] = [
        -0.9862838086968124, -0.9284348836635735, -0.8272013150697650, -0.6872929048116855,
        -0.5152486363581541, -0.3191123689278897, -0.1080549487073437, 0.1080549487073437,
        0.3191123689278897, 0.5152486363581541, 0.6872929048116855, 0.8272013150697650,
        0.9284348836635735, 0.9862838086968124,
    ];
    pub(super) const WEIGHTS_14: [f64; 14] = [
        0.0351194603317524, 0.0801580871597607, 0.1215185706879027, 0.1572031671581933,
        0.1855383974779377, 0.2051984637212955, 0.2152638534631576, 0.2152638534631576,
        0.2051984637212955, 0.1855383974779377, 0.1572031671581933, 0.1215185706879027,
        0.0801580871597607, 0.0351194603317524,
    ];

    pub(super) const NODES_16: [f64; 16] = [
        -0.9894009349916499, -0.9445750230732326, -0.8656312023878318, -0.7554044083550030,
        -0.6178762444026438, -0.4580167776572274, -0.2816035507792589, -0.0950125098376375,
        0.0950125098376375, 0.2816035507792589, 0.4580167776572274, 0.6178762444026438,
        0.7554044083550030, 0.8656312023878318, 0.9445750230732326, 0.9894009349916499,
    ];
    pub(super) const WEIGHTS_16: [f64; 16] = [
        0.0271524594117528, 0.0622535239386485, 0.0951585116824923, 0.1246289712555341,
        0.1495959888165768, 0.1691565193950028, 0.1826034150449238, 0.1894506104550687,
        0.1894506104550687, 0.1826034150449238, 0.1691565193950028, 0.1495959888165768,
        0.1246289712555341, 0.0951585116824923, 0.0622535239386485, 0.0271524594117528,
    ];

    pub(super) const NODES_18: [f64; 18] = [
        -0.9915651684209309, -0.9558239495713977, -0.8926024664975558, -0.8037049589725231,
        -0.6916870430603532, -0.5597708310739475, -0.4117511614628426, -0.2518862256915055,
        -0.0847750130417353, 0.0847750130417353, 0.2518862256915055, 0.4117511614628426,
        0.5597708310739475, 0.6916870430603532, 0.8037049589725231, 0.8926024664975558,
        0.9558239495713977, 0.9915651684209309,
    ];
    pub(super) const WEIGHTS_18: [f64; 18] = [
        0.0216160135264830, 0.0497145488949704, 0.0764257302548894, 0.1009420441062870,
        0.1225552067114782, 0.1406429146706505, 0.1546846751262652, 0.1642764837458328,
        0.1691423829631436, 0.1691423829631436, 0.1642764837458328, 0.1546846751262652,
        0.1406429146706505, 0.1225552067114782, 0.1009420441062870, 0.0764257302548894,
        0.0497145488949704, 0.0216160135264830,
    ];

    pub(super) const NODES_20: [f64; 20] = [
        -0.9931285991850949, -0.9639719272779138, -0.9122344282513259, -0.8391169718222188,
        -0.7463319064601508, -0.6360536807265150, -0.5108670019508271, -0.3737060887154195,
        -0.2277858511416451, -0.0765265211334973, 0.0765265211334973, 0.2277858511416451,
        0.3737060887154195, 0.5108670019508271, 0.6360536807265150, 0.7463319064601508,
        0.8391169718222188, 0.9122344282513259, 0.9639719272779138, 0.9931285991850949,
    ];
    pub(super) const WEIGHTS_20: [f64; 20] = [
        0.0176140071391515, 0.0406014298003864, 0.0626720483341095, 0.0832767415767052,
        0.1019301198172402, 0.1181945319615184, 0.1316886384491767, 0.1420961093183822,
        0.1491729864726040, 0.1527533871307260, 0.1527533871307260, 0.1491729864726040,
        0.1420961093183822, 0.1316886384491767, 0.1181945319615184, 0.1019301198172402,
        0.0832767415767052, 0.0626720483341095, 0.0406014298003864, 0.0176140071391515,
    ];

    pub(super) const NODES_22: [f64; 22] = [
        -0.9942945854823994, -0.9700604978354287, -0.9269567721871740, -0.8658125777203002,
        -0.7878168059792081, -0.6944872631866827, -0.5876404035069116, -0.4693558379867570,
        -0.3419358208920842, -0.2078604266882213, -0.0697392733197222, 0.0697392733197222,
        0.2078604266882213, 0.3419358208920842, 0.4693558379867570, 0.5876404035069116,
        0.6944872631866827, 0.7878168059792081, 0.8658125777203002, 0.9269567721871740,
        0.9700604978354287, 0.9942945854823994,
    ];
    pub(super) const WEIGHTS_22: [f64; 22] = [
        0.0146279952982719, 0.0337749015848153, 0.0522933351526825, 0.0697964684245201,
        0.0859416062170677, 0.1004141444428810, 0.1129322960805393, 0.1232523768105125,
        0.1311735047870624, 0.1365414983460153, 0.1392518728556321, 0.1392518728556321,
        0.1365414983460153, 0.1311735047870624, 0.1232523768105125, 0.1129322960805393,
        0.1004141444428810, 0.0859416062170677, 0.0697964684245201, 0.0522933351526825,
        0.0337749015848153, 0.0146279952982719,
    ];

    pub(super) const NODES_24: [f64; 24] = [
        -0.9951872199970214, -0.9747285559713095, -0.9382745520027328, -0.8864155270044011,
        -0.8200019859739029, -0.7401241915785544, -0.6480936519369755, -0.5454214713888396,
        -0.4337935076260451, -0.3150426796961634, -0.1911188674736163, -0.0640568928626056,
        0.0640568928626056, 0.1911188674736163, 0.3150426796961634, 0.4337935076260451,
        0.5454214713888396, 0.6480936519369755, 0.7401241915785544, 0.8200019859739029,
        0.8864155270044011, 0.9382745520027328, 0.9747285559713095, 0.9951872199970214,
    ];
    pub(super) const WEIGHTS_24: [f64; 24] = [
        0.0123412297999860, 0.0285313886289335, 0.0442774388174196, 0.0592985849154367,
        0.0733464814110802, 0.0861901615319536, 0.0976186521041139, 0.1074442701159658,
        0.1155056680537258, 0.1216704729278036, 0.1258374563468286, 0.1279381953467525,
        0.1279381953467525, 0.1258374563468286, 0.1216704729278036, 0.1155056680537258,
        0.1074442701159658, 0.0976186521041139, 0.0861901615319536, 0.0733464814110802,
        0.0592985849154367, 0.0442774388174196, 0.0285313886289335, 0.0123412297999860,
    ];

    pub(super) const NODES_26: [f64; 26] = [
        -0.9958857011456169, -0.9783854459564709, -0.9471590666617142, -0.9026378619843071,
        -0.8454459427884981, -0.7763859488206788, -0.6964272604199573, -0.6066922930176181,
        -0.5084407148245057, -0.4030517551234863, -0.2920048394859569, -0.1768588203568902,
        -0.0592300934293132, 0.0592300934293132, 0.1768588203568902, 0.2920048394859569,
        0.4030517551234863, 0.5084407148245057, 0.6066922930176181, 0.6964272604199573,
        0.7763859488206788, 0.8454459427884981, 0.9026378619843071, 0.9471590666617142,
        0.9783854459564709, 0.9958857011456169,
    ];
    pub(super) const WEIGHTS_26: [f64; 26] = [
        0.0105513726173399, 0.0244178510926323, 0.0379623832943637, 0.0509758252971484,
        0.0632740463295749, 0.0746841497656602, 0.0850458943134853, 0.0942138003559144,
        0.1020591610944256, 0.1084718405285767, 0.1133618165463197, 0.1166604434852967,
        0.1183214152792624, 0.1183214152792624, 0.1166604434852967, 0.1133618165463197,
        0.1084718405285767, 0.1020591610944256, 0.0942138003559144, 0.0850458943134853,
        0.0746841497656602, 0.0632740463295749, 0.0509758252971484, 0.0379623832943637,
        0.0244178510926323, 0.0105513726173399,
    ];

    pub(super) const NODES_28: [f64; 28] = [
        -0.9964424975739544, -0.9813031653708728, -0.9542592806289382, -0.9156330263921321,
        -0.8658925225743951, -0.8056413709171791, -0.7356108780136318, -0.6566510940388650,
        -0.5697204718114017, -0.4758742249551183, -0.3762515160890787, -0.2720616276351780,
        -0.1645692821333808, -0.0550792898840343, 0.0550792898840343, 0.1645692821333808,
        0.2720616276351780, 0.3762515160890787, 0.4758742249551183, 0.5697204718114017,
        0.6566510940388650, 0.7356108780136318, 0.8056413709171791, 0.8658925225743951,
        0.9156330263921321, 0.9542592806289382, 0.9813031653708728, 0.9964424975739544,
    ];
    pub(super) const WEIGHTS_28: [f64; 28] = [
        0.0091242825930933, 0.0211321125927716, 0.0329014277823041, 0.0442729347590042,
        0.0551073456757166, 0.0652729239669995, 0.0746462142345688, 0.0831134172289013,
        0.0905717443930329, 0.0969306579979302, 0.1021129675780610, 0.1060557659228466,
        0.1087111922582944, 0.1100470130164755, 0.1100470130164755, 0.1087111922582944,
        0.1060557659228466, 0.1021129675780610, 0.0969306579979302, 0.0905717443930329,
        0.0831134172289013, 0.0746462142345688, 0.0652729239669995, 0.0551073456757166,
        0.0442729347590042, 0.0329014277823041, 0.0211321125927716, 0.0091242825930933,
    ];

    pub(super) const NODES_30: [f64; 30] = [
        -0.9968934840746495, -0.9836681232797472, -0.9600218649683075, -0.9262000474292743,
        -0.8825605357920527, -0.8295657623827684, -0.7677774321048262, -0.6978504947933158,
        -0.6205261829892429, -0.5366241481420199, -0.4470337695380892, -0.3527047255308781,
        -0.2546369261678899, -0.1538699136085835, -0.0514718425553177, 0.0514718425553177,
        0.1538699136085835, 0.2546369261678899, 0.3527047255308781, 0.4470337695380892,
        0.5366241481420199, 0.6205261829892429, 0.6978504947933158, 0.7677774321048262,
        0.8295657623827684, 0.8825605357920527, 0.9262000474292743, 0.9600218649683075,
        0.9836681232797472, 0.9968934840746495,
    ];
    pub(super) const WEIGHTS_30: [f64; 30] = [
        0.0079681924961701, 0.0184664683110921, 0.0287847078833228, 0.0387991925696264,
        0.0484026728305939, 0.0574931562176186, 0.0659742298821804, 0.0737559747377048,
        0.0807558952294198, 0.0868997872010827, 0.0921225222377858, 0.0963687371746439,
        0.0995934205867949, 0.1017623897484052, 0.1028526528935585, 0.1028526528935585,
        0.1017623897484052, 0.0995934205867949, 0.0963687371746439, 0.0921225222377858,
        0.0868997872010827, 0.0807558952294198, 0.0737559747377048, 0.0659742298821804,
        0.0574931562176186, 0.0484026728305939, 0.0387991925696264, 0.0287847078833228,
        0.0184664683110921, 0.0079681924961701,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn every_supported_order_has_a_table() {
        for order in SUPPORTED_ORDERS {
            let rule = gauss_legendre(order).unwrap();
            assert_eq!(rule.order, order);
            assert_eq!(rule.nodes.len(), order);
            assert_eq!(rule.weights.len(), order);
        }
        assert_eq!(TABLES.len(), SUPPORTED_ORDERS.len());
    }

    #[test]
    fn nodes_are_ascending_and_inside_the_interval() {
        for rule in &TABLES {
            assert!(rule.nodes.windows(2).all(|pair| pair[0] < pair[1]));
            assert!(rule.nodes.iter().all(|n| n.abs() < 1.0));
        }
    }

    #[test]
    fn tables_are_symmetric() {
        for rule in &TABLES {
            let n = rule.order;
            for i in 0..n {
                assert_eq!(rule.nodes[i], -rule.nodes[n - 1 - i]);
                assert_eq!(rule.weights[i], rule.weights[n - 1 - i]);
            }
        }
    }

    #[test]
    fn weights_are_positive_and_sum_to_two() {
        for rule in &TABLES {
            assert!(rule.weights.iter().all(|w| *w > 0.0));
            let total: f64 = rule.weights.iter().sum();
            assert_abs_diff_eq!(total, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn rules_integrate_second_moment() {
        // integral of x^2 over [-1, 1]
        for rule in &TABLES {
            let moment: f64 = rule.levels().map(|(x, w)| w * x * x).sum();
            assert_abs_diff_eq!(moment, 2.0 / 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn unsupported_orders_are_rejected() {
        for order in [0, 1, 3, 5, 29, 31, 32, 100] {
            assert_eq!(
                gauss_legendre(order),
                Err(QuadratureError::UnsupportedOrder(order))
            );
            assert!(!is_supported(order));
        }
    }
}
