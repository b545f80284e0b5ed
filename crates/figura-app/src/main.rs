//! Figura 演示程序入口
//!
//! 通过工厂构造一组2D/3D图形，放入集合后依次演示
//! 描述列表、相似度比较和ASCII渲染。

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use figura_core::prelude::*;

/// 构造演示用的图形集合
fn create_demo_shapes() -> Result<ShapeCollection> {
    let mut collection = ShapeCollection::new();

    collection.add(create_shape(
        "circle",
        &ShapeParams::new().with("radius", 5.0),
    )?);
    collection.add(create_shape(
        "rectangle",
        &ShapeParams::new().with("width", 4.0).with("height", 6.0),
    )?);
    collection.add(create_shape(
        "pentagon",
        &ShapeParams::new().with("side", 4.0),
    )?);
    collection.add(create_shape(
        "hexagon",
        &ShapeParams::new().with("side", 6.0),
    )?);
    collection.add(create_shape("cube", &ShapeParams::new().with("side", 3.0))?);
    collection.add(create_shape(
        "sphere",
        &ShapeParams::new().with("radius", 2.0),
    )?);

    info!("Created {} demo shapes", collection.count());
    Ok(collection)
}

fn main() -> Result<()> {
    // 初始化日志
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder().with_max_level(Level::INFO).finish(),
    )?;

    info!("Starting Figura demo...");

    println!("==============================");
    println!(" Figura - 几何图形建模演示");
    println!("==============================");

    let collection = create_demo_shapes()?;

    // 按插入顺序列出所有图形
    println!();
    println!("=== FIGURAS ===");
    collection.list();

    // 相似度比较
    let shapes = collection.all_shapes();
    let (circle, pentagon, hexagon) = (&shapes[0], &shapes[2], &shapes[3]);

    println!();
    println!("=== 相似度比较 ===");
    println!(
        "Circle vs Pentagon (类型): {}",
        circle.is_similar(pentagon, None)
    );
    println!(
        "Pentagon vs Hexagon (面积): {}",
        pentagon.is_similar(hexagon, Some(&AreaSimilarity))
    );

    // ASCII渲染
    let sphere = &shapes[5];
    println!();
    println!("=== ASCII 渲染 ===");
    for shape in [circle, hexagon, sphere] {
        println!("{}:", shape.type_name());
        println!("{}", shape.render_ascii());
        println!();
    }

    println!("演示完成，所有图形处理成功。");
    info!("Figura demo finished");

    Ok(())
}
