//! Build the sample friend network and print a few queries.

use vertexgraph::*;

fn main() -> GraphResult<()> {
    let graph = GraphBuilder::sample().build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    println!(
        "The vertices are: {}",
        graph.vertices().collect::<Vec<_>>().join(", ")
    );

    println!("The edges are:");
    for edge in graph.edges() {
        println!("  {}", edge);
    }

    for vertex in &graph {
        println!("  {}", vertex);
    }

    let reached = breadth_first_search_within(&graph, "Jeorge", 2)?;
    println!(
        "Within 2 hops of Jeorge: {}",
        reached.iter().map(|v| v.key()).collect::<Vec<_>>().join(", ")
    );

    let reagan = graph.vertex("Reagan")?;
    let elf = graph.vertex("Elf")?;
    println!("Reagan reaches Elf: {}", depth_first_search(&graph, reagan, elf)?);
    println!("Hops Reagan -> Elf: {}", shortest_path(&graph, reagan, elf)?);
    if let Some(path) = find_path(&graph, "Reagan", "Elf")? {
        println!("One path: {}", path.join(" -> "));
    }

    Ok(())
}
