// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================
// 默认数据: 宝钢 VL A32 / N 交货 / 20 mm / 纵向，全部校验通过
// ==========================================

use mill_cert_audit::domain::{Certificate, ChemicalReading, Composition, Plate};

pub const BAOSHAN: &str = "BAOSHAN IRON & STEEL CO., LTD.";

// ==========================================
// Plate 构建器
// ==========================================

pub struct PlateBuilder {
    plate: Plate,
}

impl PlateBuilder {
    pub fn new(serial_number: &str) -> Self {
        let composition: Composition = [
            ("C", 15, 2),
            ("Si", 30, 2),
            ("Mn", 120, 2),
            ("P", 20, 3),
            ("S", 10, 3),
            ("Cr", 5, 2),
            ("Mo", 2, 2),
            ("Ni", 10, 2),
            ("Cu", 10, 2),
            ("Al", 30, 3),
            ("Nb", 30, 3),
            ("Ti", 15, 3),
        ]
        .iter()
        .map(|(el, raw, p)| (el.to_string(), ChemicalReading::new(*raw, *p)))
        .collect();

        Self {
            plate: Plate {
                serial_number: serial_number.to_string(),
                composition,
                delivery_condition: "N".to_string(),
                yield_strength: 360,
                tensile_strength: 500,
                elongation: 25,
                position_direction_code: "L".to_string(),
                temperature: 0,
                impact_energy_readings: vec![40, 42, 45],
            },
        }
    }

    pub fn element(mut self, element: &str, raw_value: i64, precision: u32) -> Self {
        self.plate
            .composition
            .insert(element.to_string(), ChemicalReading::new(raw_value, precision));
        self
    }

    pub fn without(mut self, element: &str) -> Self {
        self.plate.composition.remove(element);
        self
    }

    pub fn delivery(mut self, delivery_condition: &str) -> Self {
        self.plate.delivery_condition = delivery_condition.to_string();
        self
    }

    pub fn direction_code(mut self, code: &str) -> Self {
        self.plate.position_direction_code = code.to_string();
        self
    }

    pub fn yield_strength(mut self, value: i32) -> Self {
        self.plate.yield_strength = value;
        self
    }

    pub fn temperature(mut self, value: i32) -> Self {
        self.plate.temperature = value;
        self
    }

    pub fn impact(mut self, readings: &[i32]) -> Self {
        self.plate.impact_energy_readings = readings.to_vec();
        self
    }

    pub fn build(self) -> Plate {
        self.plate
    }
}

// ==========================================
// Certificate 构建器
// ==========================================

pub struct CertificateBuilder {
    certificate: Certificate,
}

impl CertificateBuilder {
    pub fn new() -> Self {
        Self {
            certificate: Certificate {
                steel_plant: BAOSHAN.to_string(),
                grade: "VL A32".to_string(),
                thickness: 20.0,
                plates: Vec::new(),
            },
        }
    }

    pub fn plant(mut self, plant: &str) -> Self {
        self.certificate.steel_plant = plant.to_string();
        self
    }

    pub fn grade(mut self, grade: &str) -> Self {
        self.certificate.grade = grade.to_string();
        self
    }

    pub fn thickness(mut self, thickness: f64) -> Self {
        self.certificate.thickness = thickness;
        self
    }

    pub fn plate(mut self, plate: Plate) -> Self {
        self.certificate.plates.push(plate);
        self
    }

    pub fn build(self) -> Certificate {
        self.certificate
    }
}

impl Default for CertificateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
