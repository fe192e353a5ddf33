// Copyright 2025 the Brushscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks two marks through shared scales, then brushes and lassos their points.
//!
//! Run with `RUST_LOG=debug` to see domain changes and view rebuilds.

use brushscale_scales::{
    ContributorId, DomainValue, ScaleConfig, ScaleError, ScaleEvent, ScaleKind, ScaleModel,
    ScaleView, Scheme, ViewRange, date,
};
use brushscale_select::{
    BrushIntervalSelector, BrushSelector, LassoSelector, Selector, project_points,
};
use env_logger::{Builder, Target};
use kurbo::Point;

struct Series {
    name: &'static str,
    x: Vec<f64>,
    y: Vec<f64>,
    group: Vec<&'static str>,
}

impl Series {
    fn pairs(&self) -> Vec<(DomainValue, DomainValue)> {
        self.x
            .iter()
            .zip(&self.y)
            .map(|(x, y)| (DomainValue::Number(*x), DomainValue::Number(*y)))
            .collect()
    }

    fn attach(&self, scales: &mut Scales) -> Result<(), ScaleError> {
        let xs: Vec<DomainValue> = self.x.iter().copied().map(DomainValue::from).collect();
        let ys: Vec<DomainValue> = self.y.iter().copied().map(DomainValue::from).collect();
        let gs: Vec<DomainValue> = self.group.iter().copied().map(DomainValue::from).collect();
        scales
            .x
            .compute_and_set_domain(&xs, &ContributorId::scoped(self.name, "x"))?;
        scales
            .y
            .compute_and_set_domain(&ys, &ContributorId::scoped(self.name, "y"))?;
        scales
            .color
            .compute_and_set_domain(&gs, &ContributorId::scoped(self.name, "color"))?;
        Ok(())
    }

    fn detach(&self, scales: &mut Scales) {
        scales.x.del_domain(&ContributorId::scoped(self.name, "x"));
        scales.y.del_domain(&ContributorId::scoped(self.name, "y"));
        scales
            .color
            .del_domain(&ContributorId::scoped(self.name, "color"));
    }
}

struct Scales {
    x: ScaleModel,
    y: ScaleModel,
    color: ScaleModel,
}

struct Views {
    x: ScaleView,
    y: ScaleView,
    color: ScaleView,
}

impl Views {
    fn sync(&mut self, scales: &Scales) -> Result<(), ScaleError> {
        self.x.sync(&scales.x)?;
        self.y.sync(&scales.y)?;
        self.color.sync(&scales.color)?;
        Ok(())
    }
}

fn print_domain_events(label: &str, model: &mut ScaleModel) {
    for ScaleEvent::DomainChanged(domain) in model.drain_events() {
        println!("  {label}: domain -> {domain:?}");
    }
}

fn main() -> Result<(), ScaleError> {
    let mut builder = Builder::from_default_env();
    builder.target(Target::Stdout);
    builder.init();

    let mut scales = Scales {
        x: ScaleModel::new(ScaleKind::Linear)?,
        y: ScaleModel::new(ScaleConfig::new(ScaleKind::Linear).with_min(0.0))?,
        color: ScaleModel::new(ScaleKind::OrdinalColor)?,
    };
    scales.x.set_padding(Some(0.05));

    let mut views = Views {
        x: ScaleView::new(ViewRange::Interval(0.0, 400.0)),
        y: ScaleView::new(ViewRange::Interval(300.0, 0.0)),
        color: ScaleView::new(ViewRange::Scheme(Scheme::Tableau10)),
    };

    let a = Series {
        name: "scatter_a",
        x: vec![1.0, 2.0, 3.5, 4.0],
        y: vec![10.0, 30.0, 20.0, 40.0],
        group: vec!["control", "control", "treated", "treated"],
    };
    let b = Series {
        name: "scatter_b",
        x: vec![-2.0, 0.5, 6.0],
        y: vec![5.0, 15.0, 25.0],
        group: vec!["placebo", "control", "treated"],
    };

    println!("attach both series");
    a.attach(&mut scales)?;
    b.attach(&mut scales)?;
    print_domain_events("x", &mut scales.x);
    print_domain_events("y", &mut scales.y);
    print_domain_events("color", &mut scales.color);
    views.sync(&scales)?;

    let points: Vec<Point> = project_points(&views.x, &views.y, &a.pairs())
        .into_iter()
        .chain(project_points(&views.x, &views.y, &b.pairs()))
        .collect();
    for (i, p) in points.iter().enumerate() {
        println!("  point {i}: ({:.1}, {:.1})", p.x, p.y);
    }
    for g in ["control", "treated", "placebo"] {
        println!("  {g}: {:?}", views.color.color(&g.into()));
    }

    println!("brush the upper-left quadrant");
    let mut brush = BrushSelector::new();
    brush.start(Point::new(0.0, 0.0));
    brush.drag(Point::new(200.0, 150.0));
    brush.end();
    println!("  selected: {:?}", brush.select(&points));
    if let Some(extent) = brush.selected_extent(&views.x, &views.y) {
        println!("  x extent: {:?}", extent.x);
        println!("  y extent: {:?}", extent.y);
    }

    println!("interval brush along x");
    let mut span = BrushIntervalSelector::new();
    span.start(250.0);
    span.drag(400.0);
    span.end();
    println!("  selected: {:?}", span.select(&points));
    println!("  extent: {:?}", span.selected_extent(&views.x));

    println!("lasso two regions");
    let mut lasso = LassoSelector::new();
    for region in [
        [(0.0, 200.0), (120.0, 200.0), (120.0, 300.0), (0.0, 300.0)],
        [(300.0, 0.0), (400.0, 0.0), (400.0, 120.0), (300.0, 120.0)],
    ] {
        lasso.start(region[0].into());
        for p in &region[1..] {
            lasso.extend((*p).into());
        }
        lasso.end();
    }
    println!("  mask: {:?}", lasso.mask(&points));

    println!("detach scatter_b");
    b.detach(&mut scales);
    print_domain_events("x", &mut scales.x);
    print_domain_events("color", &mut scales.color);
    views.sync(&scales)?;
    for e in views.x.drain_events() {
        println!("  x view: {e:?}");
    }

    println!("timeline");
    let mut t = ScaleModel::new(ScaleKind::Date)?;
    let stamps = ["2024-03-01T00:00:00.000000", "2024-03-31T00:00:00.000000"];
    let values = stamps
        .iter()
        .map(|s| DomainValue::parse_date(s))
        .collect::<Result<Vec<_>, _>>()?;
    t.compute_and_set_domain(&values, &ContributorId::new("timeline"))?;
    if let (Some(DomainValue::Date(lo)), Some(DomainValue::Date(hi))) =
        (t.domain().start(), t.domain().end())
    {
        println!(
            "  domain: {} .. {}",
            date::format_date(lo),
            date::format_date(hi)
        );
    }

    Ok(())
}
