// 2D height map: row‐major Vec<Vec<f32>>, access as `map[y][x]`
pub type HeightMap2D = Vec<Vec<f32>>;

// A major feature: an interior anchor whose elevation is final once placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturePoint {
    pub x: usize,
    pub y: usize,
    pub elevation: f32,
}

// Elevation storage plus the registry of major features
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    map: HeightMap2D,
    features: Vec<FeaturePoint>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            map: vec![vec![0.0f32; width]; height],
            features: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    // Out-of-range coordinates panic.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.map[y][x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.map[y][x] = value;
    }

    pub fn features(&self) -> &[FeaturePoint] {
        &self.features
    }

    // Register a feature and write its elevation into the map
    pub fn add_feature(&mut self, feature: FeaturePoint) {
        self.set(feature.x, feature.y, feature.elevation);
        self.features.push(feature);
    }

    pub fn is_feature(&self, x: usize, y: usize) -> bool {
        self.features.iter().any(|f| f.x == x && f.y == y)
    }

    // Signed so probes can ask about cells they are about to step into
    pub fn is_interior(&self, x: isize, y: isize) -> bool {
        x > 0 && x < self.width as isize - 1 && y > 0 && y < self.height as isize - 1
    }

    pub fn is_boundary(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && !self.is_interior(x as isize, y as isize)
    }

    pub fn rows(&self) -> &HeightMap2D {
        &self.map
    }

    // flatten the map (row‐major) into a single Vec<f32>
    pub fn flatten(&self) -> Vec<f32> {
        self.map.iter().flat_map(|row| row.iter().cloned()).collect()
    }
}
